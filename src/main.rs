// Prime-counting benchmark driver.
//
// Usage:
//   prime_bench <THREADS> [--input-size N] [--seed S] [--strategy local|atomic]
//               [--grain G] [--affinity] [--verify] [--json]
//
// Output:
//   Primes in the sample: <count>
//   SSS.mmm was the processing time
//   (with --json) {"input_size":...,"threads":...,...}

use clap::{Parser, ValueEnum};
use std::num::NonZeroUsize;
use std::process;

use prime_sample_bench::count;
use prime_sample_bench::report::RunReport;
use prime_sample_bench::sample;
use prime_sample_bench::stopwatch::Stopwatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Per-worker partial counts combined by summation
    Local,
    /// Single shared atomic counter
    Atomic,
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Strategy::Local => "local",
            Strategy::Atomic => "atomic",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "prime_bench")]
#[command(about = "Counts primes in a random sample using a fixed-size worker pool")]
struct Args {
    /// Number of worker threads
    threads: NonZeroUsize,

    /// Number of sample elements
    #[arg(long, default_value_t = 100_000_000)]
    input_size: usize,

    /// Fixed RNG seed for reproducible samples (entropy-seeded when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Reduction strategy
    #[arg(long, value_enum, default_value_t = Strategy::Local)]
    strategy: Strategy,

    /// Chunk size per task (0 = auto: one chunk per worker)
    #[arg(long, default_value_t = 0)]
    grain: usize,

    /// Pin worker threads to cores
    #[arg(long)]
    affinity: bool,

    /// Check the parallel total against a single-threaded recount
    #[arg(long)]
    verify: bool,

    /// Append a JSON report line
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    let threads = args.threads.get();

    // Generate input data (not timed)
    let numbers = sample::generate(args.input_size, args.seed);

    let mut stopwatch = Stopwatch::new();
    stopwatch.start();

    let primes = match args.strategy {
        Strategy::Local => {
            count::count_primes_local(&numbers, threads, args.grain, args.affinity)
        }
        Strategy::Atomic => {
            count::count_primes_atomic(&numbers, threads, args.grain, args.affinity)
        }
    };

    stopwatch.stop();

    println!("Primes in the sample: {}", primes);
    let line = stopwatch
        .report("\n")
        .expect("stopwatch was started and stopped");
    print!("{}", line);

    if args.verify {
        let expected = count::count_primes_sequential(&numbers);
        if primes != expected {
            eprintln!(
                "verification failed: parallel={} sequential={}",
                primes, expected
            );
            process::exit(3);
        }
    }

    if args.json {
        let report = RunReport {
            input_size: args.input_size,
            threads,
            strategy: args.strategy.name(),
            grain: args.grain,
            seed: args.seed,
            primes,
            elapsed_sec: stopwatch
                .elapsed()
                .expect("stopwatch was started and stopped")
                .as_secs_f64(),
        };
        println!("{}", report.to_json().expect("report serializes"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_thread_count_is_rejected() {
        assert!(Args::try_parse_from(["prime_bench"]).is_err());
    }

    #[test]
    fn test_zero_thread_count_is_rejected() {
        assert!(Args::try_parse_from(["prime_bench", "0"]).is_err());
    }

    #[test]
    fn test_non_numeric_thread_count_is_rejected() {
        assert!(Args::try_parse_from(["prime_bench", "four"]).is_err());
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        assert!(Args::try_parse_from(["prime_bench", "4", "8"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["prime_bench", "4"]).unwrap();
        assert_eq!(args.threads.get(), 4);
        assert_eq!(args.input_size, 100_000_000);
        assert_eq!(args.seed, None);
        assert_eq!(args.strategy, Strategy::Local);
        assert_eq!(args.grain, 0);
        assert!(!args.affinity);
        assert!(!args.verify);
        assert!(!args.json);
    }

    #[test]
    fn test_full_flag_set_parses() {
        let args = Args::try_parse_from([
            "prime_bench",
            "8",
            "--input-size",
            "1000",
            "--seed",
            "42",
            "--strategy",
            "atomic",
            "--grain",
            "128",
            "--affinity",
            "--verify",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.threads.get(), 8);
        assert_eq!(args.input_size, 1000);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.strategy, Strategy::Atomic);
        assert_eq!(args.grain, 128);
        assert!(args.affinity && args.verify && args.json);
    }
}
