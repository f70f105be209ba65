use crate::{trial::is_prime, PrimalityTest};

const INITIAL_LIMIT: usize = 1 << 16;

/// Candidates at or past this value are handed to trial division instead of
/// growing the table any further.
pub const MAX_LIMIT: usize = 1 << 26;

/// Sieve of Eratosthenes that grows on demand.
///
/// The table covers `0..limit()`. A candidate outside it doubles the limit
/// (rebuilding the table from scratch) until the candidate fits or
/// [`MAX_LIMIT`] is reached.
#[derive(Debug, Clone)]
pub struct Sieve {
    composite: Vec<bool>,
}

impl Sieve {
    pub fn new() -> Self {
        Self::with_limit(INITIAL_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        let mut sieve = Sieve {
            composite: Vec::new(),
        };
        sieve.rebuild(limit);
        sieve
    }

    pub fn limit(&self) -> usize {
        self.composite.len()
    }

    fn rebuild(&mut self, limit: usize) {
        let limit = limit.clamp(2, MAX_LIMIT);
        let mut composite = vec![false; limit];
        composite[0] = true;
        composite[1] = true;
        let mut i = 2;
        while i * i < limit {
            if !composite[i] {
                for j in (i * i..limit).step_by(i) {
                    composite[j] = true;
                }
            }
            i += 1;
        }
        self.composite = composite;
    }
}

impl Default for Sieve {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimalityTest for Sieve {
    fn is_prime(&mut self, candidate: i64) -> bool {
        match usize::try_from(candidate) {
            Ok(index) if index < MAX_LIMIT => {
                if index >= self.limit() {
                    let mut limit = self.limit();
                    while limit <= index {
                        limit *= 2;
                    }
                    self.rebuild(limit);
                }
                !self.composite[index]
            }
            _ => is_prime(candidate),
        }
    }
}
