//! Uniform card shuffling with an injectable random source.

use rand::{Rng, rngs::ThreadRng, seq::SliceRandom};

/// Card shuffler
///
/// Uses a Fisher-Yates shuffle, so every ordering is equally likely. The
/// default shuffler draws from the calling thread's generator; pass a seeded
/// generator with [`Shuffler::with_rng`] for reproducible shuffles.
#[derive(Clone, Debug)]
pub struct Shuffler<R = ThreadRng> {
    /// Random number generator
    rng: R,
}

impl Shuffler<ThreadRng> {
    /// Create a shuffler backed by the thread-local generator
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<R: Rng> Shuffler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Shuffle `cards` in place
    pub fn shuffle_in_place<C>(&mut self, cards: &mut [C]) {
        cards.shuffle(&mut self.rng);
    }

    /// Return a shuffled copy of `cards`, leaving the input untouched
    pub fn shuffle_copy<C: Clone>(&mut self, cards: &[C]) -> Vec<C> {
        let mut copy = cards.to_vec();
        copy.shuffle(&mut self.rng);
        copy
    }
}

impl Default for Shuffler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_shuffle_copy_keeps_input() {
        let input: Vec<u32> = (0..52).collect();
        let mut shuffler = Shuffler::new();
        let shuffled = shuffler.shuffle_copy(&input);

        assert_eq!(input, (0..52).collect::<Vec<_>>());
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_shuffle_in_place_is_permutation() {
        let mut cards: Vec<u32> = (0..52).collect();
        Shuffler::new().shuffle_in_place(&mut cards);

        let mut sorted = cards.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..52).collect::<Vec<_>>());
    }

    #[test]
    fn test_seeded_shuffles_repeat() {
        let input: Vec<u32> = (0..52).collect();
        let first = Shuffler::with_rng(StdRng::seed_from_u64(7)).shuffle_copy(&input);
        let second = Shuffler::with_rng(StdRng::seed_from_u64(7)).shuffle_copy(&input);
        assert_eq!(first, second);

        // Not guaranteed, but 52! orderings make a fixed point astronomically unlikely
        assert_ne!(first, input);
    }

    #[test]
    fn test_empty_and_single() {
        let mut shuffler = Shuffler::new();
        let mut empty: Vec<u32> = vec![];
        shuffler.shuffle_in_place(&mut empty);
        assert!(empty.is_empty());
        assert_eq!(shuffler.shuffle_copy(&[9]), vec![9]);
    }
}
