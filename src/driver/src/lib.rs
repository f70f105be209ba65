use {
    derive_more::{Display, From},
    primality::PrimalityTest,
    std::io::Write,
};

/// A value the driver found to be prime. Displays as the bare decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, From)]
pub struct Prime(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub found: i64,
    pub largest: Option<Prime>,
}

/// Writes successive primes to `out`, one per line, starting from 2.
///
/// The loop runs while the number of primes found so far is `<= n`, so it
/// stops after `n + 1` primes, not `n`. A negative `n` writes nothing.
pub fn calc_primes(
    n: i64,
    test: &mut impl PrimalityTest,
    out: &mut impl Write,
) -> std::io::Result<Summary> {
    let mut candidate = 2;
    let mut found = 0;
    let mut largest = None;
    while found <= n {
        if test.is_prime(candidate) {
            let prime = Prime::from(candidate);
            writeln!(out, "{prime}")?;
            largest = Some(prime);
            found += 1;
        }
        candidate += 1;
    }
    Ok(Summary { found, largest })
}
