use std::sync::atomic::AtomicBool;

pub(crate) static DEBUG: AtomicBool = AtomicBool::new(false);

// stdout carries the primes, so debug output goes to stderr
macro_rules! debug_eprintln {
    ($($arg:tt)*) => {
        if $crate::common::DEBUG.load(::std::sync::atomic::Ordering::Relaxed) {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use debug_eprintln;
