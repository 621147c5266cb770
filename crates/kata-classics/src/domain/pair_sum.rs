//! Pair sum search implementation
//!
//! This module provides functions for finding two positions in a sequence
//! whose values sum to a target, in three variants with different
//! time/space trade-offs.

use std::cmp::Ordering;

#[cfg(feature = "fast-hash")]
type SeenMap = rustc_hash::FxHashMap<i64, usize>;

#[cfg(not(feature = "fast-hash"))]
type SeenMap = std::collections::HashMap<i64, usize>;

/// Matched pair of positions
///
/// Invariant: `first < second` in input order, and the values at the two
/// positions sum to the search target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairMatch {
    /// Position of the earlier matched element
    pub first: usize,
    /// Position of the later matched element
    pub second: usize,
}

impl PairMatch {
    /// Create a new pair match
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }
}

/// Find a pair summing to `target` using a seen-value map
///
/// This is the canonical single-pass form. For each value the complement
/// `target - value` is looked up among previously seen values; on a hit the
/// earlier position and the current position form the result.
///
/// The first found pair wins, where "first" is defined by the position of
/// the second element in input order. O(n) time, O(n) space.
///
/// # Arguments
/// * `values` - The sequence to search (never mutated)
/// * `target` - The target sum
///
/// # Returns
/// `Some(PairMatch)` for the matched positions, `None` if no pair sums to
/// the target
pub fn pair_sum_hash(values: &[i64], target: i64) -> Option<PairMatch> {
    let mut seen = SeenMap::default();

    for (index, &value) in values.iter().enumerate() {
        // Any i64 pair sum fits in i128, so the complement never wraps.
        // A complement outside the i64 range cannot be present in the input.
        let complement = target as i128 - value as i128;
        if let Ok(complement) = i64::try_from(complement)
            && let Some(&first) = seen.get(&complement)
        {
            return Some(PairMatch::new(first, index));
        }

        // Later occurrences shadow earlier ones, matching the first-found
        // rule: the reported partner is the most recent candidate.
        seen.insert(value, index);
    }

    None
}

/// Find a pair summing to `target` by checking every ordered pair
///
/// Returns the lexicographically smallest `(i, j)` with `i < j` that
/// satisfies the sum. O(n^2) time, O(1) space.
pub fn pair_sum_brute_force(values: &[i64], target: i64) -> Option<PairMatch> {
    for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            if values[i] as i128 + values[j] as i128 == target as i128 {
                return Some(PairMatch::new(i, j));
            }
        }
    }

    None
}

/// Find a pair summing to `target` by sorting and scanning inward
///
/// Pairs each value with its original index, sorts by value, then walks a
/// left and a right cursor toward each other. Returns the pair's original
/// indices in ascending order. O(n log n) time, O(n) space for the sorted
/// copy; the input itself is never reordered.
///
/// When several valid pairs exist this variant may return a different pair
/// than [`pair_sum_hash`]; the contract only guarantees *a* valid pair.
pub fn pair_sum_two_pointers(values: &[i64], target: i64) -> Option<PairMatch> {
    if values.len() < 2 {
        return None;
    }

    let mut indexed: Vec<(i64, usize)> = values
        .iter()
        .copied()
        .enumerate()
        .map(|(index, value)| (value, index))
        .collect();
    indexed.sort_by_key(|&(value, _)| value);

    let mut left = 0;
    let mut right = indexed.len() - 1;

    while left < right {
        let sum = indexed[left].0 as i128 + indexed[right].0 as i128;
        match sum.cmp(&(target as i128)) {
            Ordering::Equal => {
                let a = indexed[left].1;
                let b = indexed[right].1;
                return Some(PairMatch::new(a.min(b), a.max(b)));
            }
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }

    None
}
