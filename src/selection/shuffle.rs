//! Shuffle-then-take selection over bank indices

use crate::bank::QuestionBank;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of questions a session will hold for a requested count
#[inline]
pub fn selection_size(bank_len: usize, requested: usize) -> usize {
    requested.min(bank_len)
}

/// Draw `min(requested, bank_len)` distinct indices in `0..bank_len`
///
/// Runs a Fisher–Yates pass that stops after `k` swaps, so the result is a
/// uniformly random `k`-prefix of a uniformly random permutation. The bank
/// itself is never reordered.
pub fn select_indices<R: Rng + ?Sized>(
    bank_len: usize,
    requested: usize,
    rng: &mut R,
) -> Vec<usize> {
    let k = selection_size(bank_len, requested);
    let mut indices: Vec<usize> = (0..bank_len).collect();
    let (chosen, _) = indices.partial_shuffle(rng, k);
    chosen.to_vec()
}

/// Select question positions for a new session from the bank
#[inline]
pub fn select_from_bank<R: Rng + ?Sized>(
    bank: &QuestionBank,
    requested: usize,
    rng: &mut R,
) -> Vec<usize> {
    select_indices(bank.len(), requested, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_selection_size_clamps() {
        assert_eq!(selection_size(90, 45), 45);
        assert_eq!(selection_size(90, 200), 90);
    }

    #[test]
    fn test_full_selection_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut picked = select_indices(10, 10, &mut rng);
        picked.sort_unstable();
        assert_eq!(picked, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_single_question_bank() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_indices(1, 45, &mut rng), vec![0]);
    }

    #[test]
    fn test_first_position_distribution() {
        // Each index should lead the selection about a quarter of the time
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            let picked = select_indices(4, 2, &mut rng);
            counts[picked[0]] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "skewed counts: {:?}", counts);
        }
    }
}
