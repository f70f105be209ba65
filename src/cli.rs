use {
    crate::common::{debug_eprintln, DEBUG},
    clap::{Parser, ValueEnum},
    primality::{Sieve, TrialDivision},
    std::{
        io::{BufWriter, ErrorKind, Write},
        sync::atomic::Ordering,
        time::Instant,
    },
};

/// Number passed to the driver. It prints one more prime than this.
const TARGET_COUNT: i64 = 1_000_000;

/// Print prime numbers, one per line, in ascending order
#[derive(Debug, Parser)]
pub struct Cli {
    /// Primality test to use [does not change the output]
    #[arg(long, default_value = "trial")]
    method: Method,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Method {
    Trial,
    Sieve,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    debug_eprintln!("method: {:?}, target count: {TARGET_COUNT}", cli.method);

    let start = Instant::now();
    let mut stdout = BufWriter::new(std::io::stdout().lock());
    let result = match cli.method {
        Method::Trial => driver::calc_primes(TARGET_COUNT, &mut TrialDivision, &mut stdout),
        Method::Sieve => driver::calc_primes(TARGET_COUNT, &mut Sieve::new(), &mut stdout),
    }
    .and_then(|summary| stdout.flush().map(|()| summary));

    match result {
        Ok(summary) => {
            debug_eprintln!(
                "found {} primes, largest {:?}, in {:?}",
                summary.found,
                summary.largest,
                start.elapsed()
            );
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug_eprintln!("stdout closed after {:?}", start.elapsed());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
