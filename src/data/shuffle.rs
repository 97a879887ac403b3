use rand::seq::SliceRandom;

use crate::data::clean::Sample;

/// Shuffles the dataset in place with a uniform Fisher–Yates pass.
///
/// The pipeline shuffles a caller-owned copy exactly once, before training;
/// epochs never reshuffle, so batch membership is stable across the run.
pub fn shuffle(samples: &mut [Sample]) {
    samples.shuffle(&mut rand::thread_rng());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(n: usize) -> Vec<Sample> {
        (0..n)
            .map(|i| Sample { horsepower: 50.0 + i as f64, mpg: 40.0 - i as f64 * 0.1 })
            .collect()
    }

    #[test]
    fn preserves_length() {
        let mut samples = dataset(37);
        shuffle(&mut samples);
        assert_eq!(samples.len(), 37);
    }

    #[test]
    fn preserves_multiset_of_samples() {
        let original = dataset(64);
        let mut shuffled = original.clone();
        shuffle(&mut shuffled);

        // The permutation itself is non-deterministic; only compare contents.
        let key = |s: &Sample| (s.horsepower.to_bits(), s.mpg.to_bits());
        let mut a: Vec<_> = original.iter().map(key).collect();
        let mut b: Vec<_> = shuffled.iter().map(key).collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }
}
