mod sieve;
mod trial;

pub use {
    sieve::{Sieve, MAX_LIMIT},
    trial::{is_prime, TrialDivision},
};

/// A way of deciding whether a single integer is prime.
///
/// Implementations must agree on every input: swapping one for another may
/// change how long a run takes, never what it prints.
pub trait PrimalityTest {
    fn is_prime(&mut self, candidate: i64) -> bool;
}
