use rand::seq::SliceRandom;
use rand::thread_rng;

/// Strategy for randomizing option order.
///
/// Kept as a trait so the loader can take a deterministic permutation
/// in tests instead of a real RNG.
pub trait Shuffle {
    fn shuffle(&mut self, items: &mut [String]);
}

/// Uniform shuffle backed by the thread-local RNG. Not cryptographic,
/// which is fine for rearranging quiz options.
pub struct ThreadRngShuffle;

impl Shuffle for ThreadRngShuffle {
    fn shuffle(&mut self, items: &mut [String]) {
        items.shuffle(&mut thread_rng());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_preserves_items() {
        let original = vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string(),
        ];
        let mut shuffled = original.clone();
        ThreadRngShuffle.shuffle(&mut shuffled);

        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, original);
    }
}
