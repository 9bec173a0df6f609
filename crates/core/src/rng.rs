//! RNG module - deck shuffling
//!
//! Decks are shuffled with Fisher-Yates over a `rand` source. Seeded
//! generators give reproducible decks for tests and replays.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic generator for the given seed
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the operating system
pub fn entropy_rng() -> StdRng {
    StdRng::from_os_rng()
}

/// Shuffle a slice using Fisher-Yates
///
/// Walks from the last index down to 1, swapping each element with a
/// uniformly chosen index in `[0, i]`.
pub fn fisher_yates<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_deterministic() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();

        fisher_yates(&mut a, &mut seeded_rng(12345));
        fisher_yates(&mut b, &mut seeded_rng(12345));

        // Same seed should produce same order
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut values: Vec<u32> = (0..50).collect();
        fisher_yates(&mut values, &mut seeded_rng(7));

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_different_seeds() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();

        fisher_yates(&mut a, &mut seeded_rng(1));
        fisher_yates(&mut b, &mut seeded_rng(2));

        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_short_slices() {
        let mut empty: Vec<u32> = Vec::new();
        fisher_yates(&mut empty, &mut seeded_rng(1));
        assert!(empty.is_empty());

        let mut one = vec![42];
        fisher_yates(&mut one, &mut seeded_rng(1));
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // Over many shuffles, element 0 should land in every slot.
        let mut rng = seeded_rng(99);
        let mut seen = [false; 6];
        for _ in 0..500 {
            let mut values = [0u8, 1, 2, 3, 4, 5];
            fisher_yates(&mut values, &mut rng);
            let pos = values.iter().position(|&v| v == 0).unwrap();
            seen[pos] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
