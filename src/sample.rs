// Sample generation (not timed)

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `n` uniform integers in [0, 9].
///
/// `Some(seed)` gives a reproducible sample; `None` seeds from entropy for
/// one-off benchmark runs.
pub fn generate(n: usize, seed: Option<u64>) -> Vec<u32> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let values = Uniform::from(0u32..10);
    (0..n).map(|_| rng.sample(values)).collect()
}
