//! Frequency-spread measurement for generator output streams
//!
//! Backs the uniformity property tests: a uniform stream's per-value
//! frequencies cluster around `1/k`, so their sample standard deviation
//! falls toward zero as the draw count grows.

use core::hash::Hash;

use hashbrown::HashMap;
use libm::sqrt;

/// Sample standard deviation of per-value frequencies in a stream of
/// draws
///
/// Frequencies are counts divided by the total draw count; the spread
/// uses the `k - 1` divisor over the `k` distinct values. Streams with
/// fewer than two distinct values report zero spread.
pub fn frequency_stdev<T: Copy + Eq + Hash>(samples: &[T]) -> f64 {
    let mut counts: HashMap<T, u32> = HashMap::new();

    for sample in samples.iter() {
        *counts.entry(*sample).or_insert(0) += 1;
    }

    if counts.len() < 2 {
        return 0.0;
    }

    let total = samples.len() as f64;

    let mut mean = 0.0;
    for count in counts.values() {
        mean += *count as f64 / total;
    }
    mean /= counts.len() as f64;

    let mut accum = 0.0;
    for count in counts.values() {
        let dev = *count as f64 / total - mean;
        accum += dev * dev;
    }

    sqrt(accum / (counts.len() - 1) as f64)
}
