use crate::PrimalityTest;

/// Decides primality by trial division.
///
/// Anything below 2 is not prime. Otherwise every `d` from 2 upward is tried
/// while `d * d <= x`, and the first one that divides `x` evenly makes it
/// composite.
pub fn is_prime(x: i64) -> bool {
    if x < 2 {
        return false;
    }
    if x == 2 {
        return true;
    }
    let mut d = 2;
    // same bound as `d * d <= x`, minus the overflow near `i64::MAX`
    while d <= x / d {
        if x % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TrialDivision;

impl PrimalityTest for TrialDivision {
    fn is_prime(&mut self, candidate: i64) -> bool {
        is_prime(candidate)
    }
}
