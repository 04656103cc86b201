//! Pure statistics over a set of die values.
//!
//! These helpers take plain `&[u8]` slices so they stay usable outside a
//! validated [`crate::dice::Roll`]; the scoring rules call them with
//! `roll.values()`.

/// Arithmetic sum of every die. An empty slice sums to 0.
///
/// ```
/// use yahtzee_engine::stats::sum;
/// assert_eq!(sum(&[2, 2, 2, 6, 6]), 18);
/// ```
pub fn sum(values: &[u8]) -> u32 {
    values.iter().map(|&v| u32::from(v)).sum()
}

/// Number of dice showing `value`. Values that never appear count as 0.
pub fn count_value(values: &[u8], value: u8) -> u32 {
    values.iter().filter(|&&v| v == value).count() as u32
}

/// How many dice share each distinct value, with the values themselves dropped.
///
/// `[2, 2, 2, 5, 5]` yields the counts `{3, 2}`. The order of the returned
/// counts is unspecified; treat the result as an unordered collection.
pub fn frequency_counts(values: &[u8]) -> Vec<u32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
        .chunk_by(|a, b| a == b)
        .map(|run| run.len() as u32)
        .collect()
}

/// Bitset of the distinct faces present: bit `v` is set when some die shows `v`.
///
/// Only values 0..=7 fit; callers pass die faces 1-6.
pub(crate) fn face_mask(values: &[u8]) -> u8 {
    values
        .iter()
        .filter(|&&v| v < 8)
        .fold(0u8, |mask, &v| mask | (1 << v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_counts_sum_to_dice_count() {
        let mut counts = frequency_counts(&[2, 5, 2, 5, 2]);
        counts.sort_unstable();
        assert_eq!(counts, vec![2, 3]);
        assert_eq!(counts.iter().sum::<u32>(), 5);
    }

    #[test]
    fn frequency_counts_of_empty_is_empty() {
        assert!(frequency_counts(&[]).is_empty());
    }

    #[test]
    fn face_mask_sets_one_bit_per_face() {
        assert_eq!(face_mask(&[1, 1, 3, 6, 6]), 0b0100_1010);
        assert_eq!(face_mask(&[]), 0);
    }
}
