//! Seeded train/test splitting.
//!
//! The split is a deterministic function of the seed and the input order:
//! a seeded pseudo-random shuffle followed by a cut at
//! `round(train_fraction * N)`. Reproducibility is load-bearing — the same
//! seed over the same input always yields byte-identical partitions, so
//! evaluation numbers stay comparable across runs.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{Result, SpamsiftError};

/// Partition `items` into a train set and a test set.
///
/// `train_fraction` must lie strictly between 0 and 1. Every item lands in
/// exactly one of the two sets.
///
/// # Examples
///
/// ```
/// use spamsift::dataset::split::train_test_split;
///
/// let items: Vec<u32> = (0..10).collect();
/// let (train, test) = train_test_split(items, 0.8, 42).unwrap();
///
/// assert_eq!(train.len(), 8);
/// assert_eq!(test.len(), 2);
/// ```
pub fn train_test_split<T>(
    mut items: Vec<T>,
    train_fraction: f64,
    seed: u64,
) -> Result<(Vec<T>, Vec<T>)> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(SpamsiftError::config(format!(
            "split: train_fraction must be in (0, 1) exclusive, got {train_fraction}"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);

    let cut = (train_fraction * items.len() as f64).round() as usize;
    let test = items.split_off(cut.min(items.len()));

    Ok((items, test))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_split_sizes() {
        let items: Vec<u32> = (0..100).collect();
        let (train, test) = train_test_split(items, 0.8, 42).unwrap();
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(), 20);
    }

    #[test]
    fn test_split_rounds_cut() {
        // round(0.5 * 3) = 2
        let (train, test) = train_test_split(vec![1, 2, 3], 0.5, 7).unwrap();
        assert_eq!(train.len(), 2);
        assert_eq!(test.len(), 1);
    }

    #[test]
    fn test_split_disjoint_and_exhaustive() {
        let items: Vec<u32> = (0..57).collect();
        let (train, test) = train_test_split(items, 0.7, 9).unwrap();

        assert_eq!(train.len() + test.len(), 57);
        let train_set: HashSet<_> = train.iter().collect();
        let test_set: HashSet<_> = test.iter().collect();
        assert!(train_set.is_disjoint(&test_set));

        let mut all: Vec<u32> = train.iter().chain(test.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..57).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_reproducible() {
        let items: Vec<u32> = (0..50).collect();
        let first = train_test_split(items.clone(), 0.8, 1234).unwrap();
        let second = train_test_split(items, 0.8, 1234).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_split_seed_changes_partition() {
        let items: Vec<u32> = (0..50).collect();
        let (train_a, _) = train_test_split(items.clone(), 0.8, 1).unwrap();
        let (train_b, _) = train_test_split(items, 0.8, 2).unwrap();
        assert_ne!(train_a, train_b);
    }

    #[test]
    fn test_invalid_fraction_rejected() {
        for fraction in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let err = train_test_split(vec![1, 2, 3], fraction, 42).unwrap_err();
            assert!(matches!(err, SpamsiftError::Config(_)), "{fraction}");
        }
    }

    #[test]
    fn test_empty_input() {
        let (train, test) = train_test_split(Vec::<u32>::new(), 0.8, 42).unwrap();
        assert!(train.is_empty());
        assert!(test.is_empty());
    }
}
