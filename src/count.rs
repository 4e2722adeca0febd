// Parallel prime counting (Rust/Rayon version of the OpenMP static-schedule loop)
// Strategies:
//   1) local:  per-chunk partial counts + reduction by summation
//   2) atomic: single shared counter bumped per hit

use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

// Global counter for thread ID assignment when using affinity
static THREAD_COUNTER: AtomicUsize = AtomicUsize::new(0);

// Thread affinity: Pin thread to specific core
fn set_thread_affinity() -> usize {
    let thread_id = THREAD_COUNTER.fetch_add(1, Ordering::SeqCst);

    if let Some(core_ids) = core_affinity::get_core_ids() {
        if thread_id < core_ids.len() {
            core_affinity::set_for_current(core_ids[thread_id]);
        }
    }

    thread_id
}

/// Primality test matching the reference loop: trial division for
/// `d in 2..=ceil(sqrt(v))`, where a divisor hit rejects and reaching the
/// limit without a hit accepts. The limit check runs after the divisor
/// check, so 0, 1 and 2 are all rejected (2 divides itself before the
/// loop can credit it). That table is the contract; do not "fix" it.
pub fn is_prime(v: u32) -> bool {
    let limit = (v as f64).sqrt().ceil() as u32;
    for d in 2..=limit {
        if v % d == 0 {
            return false;
        }
        if d == limit {
            return true;
        }
    }
    false
}

fn build_pool(num_threads: usize, use_affinity: bool) -> rayon::ThreadPool {
    assert!(num_threads >= 1, "worker count must be at least 1");

    // Reset counter for affinity
    if use_affinity {
        THREAD_COUNTER.store(0, Ordering::SeqCst);
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .start_handler(move |_| {
            if use_affinity {
                set_thread_affinity();
            }
        })
        .build()
        .expect("failed to build worker pool")
}

/// Fork-join count of the elements satisfying `pred`.
///
/// Builds a dedicated pool of `num_threads` workers, splits `data` into
/// chunks of `grain` elements (0 = auto: one chunk per worker, the
/// static-schedule analogue), counts each chunk locally and sums the
/// partial counts. The result is identical for any worker count or grain.
pub fn parallel_count<P>(
    data: &[u32],
    pred: P,
    num_threads: usize,
    grain: usize,
    use_affinity: bool,
) -> u64
where
    P: Fn(u32) -> bool + Sync,
{
    let pool = build_pool(num_threads, use_affinity);

    if data.is_empty() {
        return 0;
    }

    let chunk_size = if grain > 0 {
        grain
    } else {
        (data.len() + num_threads - 1) / num_threads
    };

    pool.install(|| {
        data.par_chunks(chunk_size)
            .map(|chunk| chunk.iter().filter(|&&v| pred(v)).count() as u64)
            .sum()
    })
}

/// Strategy 1: per-worker local counts combined by an explicit reduction.
pub fn count_primes_local(
    data: &[u32],
    num_threads: usize,
    grain: usize,
    use_affinity: bool,
) -> u64 {
    parallel_count(data, is_prime, num_threads, grain, use_affinity)
}

/// Strategy 2: shared atomic counter, one relaxed fetch_add per hit.
pub fn count_primes_atomic(
    data: &[u32],
    num_threads: usize,
    grain: usize,
    use_affinity: bool,
) -> u64 {
    let pool = build_pool(num_threads, use_affinity);

    let total = AtomicU64::new(0);

    pool.install(|| {
        if grain > 0 {
            data.par_chunks(grain).for_each(|chunk| {
                for &v in chunk {
                    if is_prime(v) {
                        total.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        } else {
            data.par_iter().for_each(|&v| {
                if is_prime(v) {
                    total.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });

    total.load(Ordering::Relaxed)
}

/// Single-threaded reference fold, used for verification.
pub fn count_primes_sequential(data: &[u32]) -> u64 {
    data.iter().filter(|&&v| is_prime(v)).count() as u64
}
