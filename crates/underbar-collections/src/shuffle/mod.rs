//! Randomized reordering of sequences.
//!
//! All variants copy the input first and then run a Fisher-Yates pass over
//! the copy, so the caller's slice is never modified.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Return the elements of `seq` in a uniformly random order.
///
/// ```
/// use underbar_collections::shuffle;
///
/// let deck = [1, 2, 3, 4];
/// let mut shuffled = shuffle(&deck);
/// shuffled.sort();
/// assert_eq!(shuffled, deck);
/// ```
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::rng())
}

/// Shuffle with a generator seeded from `seed`; the same seed always
/// produces the same order.
pub fn shuffle_seeded<T: Clone>(seq: &[T], seed: u64) -> Vec<T> {
    shuffle_with(seq, &mut StdRng::seed_from_u64(seed))
}

/// Shuffle drawing randomness from `rng`.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(seq: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = seq.to_vec();

    // Walk down from the last slot, swapping each with a pick from the
    // not-yet-fixed prefix including itself.
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }

    trace!(len = shuffled.len(), "shuffled sequence");
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_and_single() {
        let empty: [u8; 0] = [];
        assert!(shuffle(&empty).is_empty());
        assert_eq!(shuffle(&["only"]), vec!["only"]);
    }

    #[test]
    fn test_input_not_modified() {
        let input = vec![4, 5, 6, 7, 8, 9, 10];
        let snapshot = input.clone();
        let _ = shuffle(&input);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_same_seed_same_order() {
        let input: Vec<u32> = (0..50).collect();
        assert_eq!(shuffle_seeded(&input, 42), shuffle_seeded(&input, 42));
        assert_ne!(shuffle_seeded(&input, 42), shuffle_seeded(&input, 43));
    }

    #[test]
    fn test_eventually_reorders() {
        let input: Vec<u32> = (0..10).collect();
        let moved = (0..20).any(|_| shuffle(&input) != input);
        assert!(moved, "twenty shuffles of ten elements all kept the input order");
    }

    #[test]
    fn test_accepts_trait_object_rng() {
        let input: Vec<u32> = (0..20).collect();
        let mut seeded = StdRng::seed_from_u64(3);
        let rng: &mut dyn rand::RngCore = &mut seeded;

        let shuffled = shuffle_with(&input, rng);
        assert_eq!(shuffled, shuffle_seeded(&input, 3));
    }

    #[test]
    fn test_permutations_are_uniform() {
        const TRIALS: usize = 60_000;
        let input = ['a', 'b', 'c'];
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<Vec<char>, usize> = HashMap::new();

        for _ in 0..TRIALS {
            *counts.entry(shuffle_with(&input, &mut rng)).or_default() += 1;
        }

        // 3! orderings, each expected 10_000 times; allow ~5 standard deviations
        assert_eq!(counts.len(), 6);
        let expected = TRIALS / 6;
        for (order, count) in &counts {
            assert!(
                count.abs_diff(expected) < 500,
                "{order:?} appeared {count} times, expected about {expected}"
            );
        }
    }

    // Same length, same multiset, input untouched
    proptest! {
        #[test]
        fn shuffle_is_permutation(input in prop::collection::vec(0u8..8, 0..40), seed in any::<u64>()) {
            let snapshot = input.clone();
            let mut shuffled = shuffle_seeded(&input, seed);

            prop_assert_eq!(&input, &snapshot);
            prop_assert_eq!(shuffled.len(), input.len());

            let mut sorted_input = input;
            sorted_input.sort_unstable();
            shuffled.sort_unstable();
            prop_assert_eq!(shuffled, sorted_input);
        }
    }
}
