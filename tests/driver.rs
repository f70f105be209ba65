use {
    driver::{calc_primes, Prime, Summary},
    primality::{Sieve, TrialDivision},
    rstest::rstest,
    std::io::{self, Write},
};

fn run(n: i64) -> (Vec<i64>, Summary) {
    let mut output = Vec::new();
    let summary = calc_primes(n, &mut TrialDivision, &mut output).unwrap();
    let primes = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| line.parse().unwrap())
        .collect();
    (primes, summary)
}

#[rstest]
#[case(0, vec![2])]
#[case(4, vec![2, 3, 5, 7, 11])]
#[case(-1, vec![])]
#[case(i64::MIN, vec![])]
fn prints_one_more_than_n(#[case] n: i64, #[case] expected: Vec<i64>) {
    let (primes, summary) = run(n);
    assert_eq!(primes, expected);
    assert_eq!(summary.found, expected.len() as i64);
    assert_eq!(summary.largest, expected.last().copied().map(Prime));
}

#[test]
fn thousandth_prime() {
    let (primes, summary) = run(999);
    assert_eq!(primes.len(), 1000);
    assert_eq!(summary.largest, Some(Prime(7919)));
}

#[test]
fn ascending_without_gaps() {
    let (primes, _) = run(2000);
    assert!(primes.windows(2).all(|pair| pair[0] < pair[1]));
    let expected: Vec<i64> = (2..=primes[primes.len() - 1])
        .filter(|&x| primality::is_prime(x))
        .collect();
    assert_eq!(primes, expected);
}

#[test]
fn sieve_output_is_identical() {
    let mut trial = Vec::new();
    let mut sieve = Vec::new();
    calc_primes(5000, &mut TrialDivision, &mut trial).unwrap();
    calc_primes(5000, &mut Sieve::with_limit(8), &mut sieve).unwrap();
    assert_eq!(trial, sieve);
}

#[test]
fn prime_displays_as_number() {
    assert_eq!(Prime::from(7919).to_string(), "7919");
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_errors_propagate() {
    let err = calc_primes(10, &mut TrialDivision, &mut ClosedPipe).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn negative_n_never_writes() {
    let summary = calc_primes(-5, &mut TrialDivision, &mut ClosedPipe).unwrap();
    assert_eq!(summary, Summary { found: 0, largest: None });
}
