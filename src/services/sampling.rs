//! Uniform random integer sampling.

use rand::Rng;

/// Draw `n` independent uniform integers in `[low, high]`, with replacement.
///
/// Unseeded thread RNG; determinism is out of scope.
pub fn generate_random_numbers(n: usize, low: i64, high: i64) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(low..=high)).collect()
}
