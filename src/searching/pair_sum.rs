//! Pair-sum search over an integer sequence.
//!
//! Variables:
//!   seen   : HashMap<i64, usize>  — previously seen value → its position
//!   target : i64
//!
//! Equations:
//!   complement(i) = target - values[i]
//!   hit  iff complement(i) ∈ seen  →  (seen[complement(i)], i)
//!   miss: seen[values[i]] = i,  continue
//!
//! Single left-to-right pass: O(N) time, O(N) auxiliary space.

use std::collections::HashMap;

/// Positions of the first pair, in scan order, whose values sum to `target`.
/// Positions are zero-based and the earlier-seen one comes first.
/// Returns `None` when no qualifying pair exists.
pub fn find_pair(values: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(values.len());
    for (i, &v) in values.iter().enumerate() {
        let complement = target - v;
        if let Some(&first) = seen.get(&complement) {
            log::trace!("pair hit at ({}, {}): {} + {} == {}", first, i, complement, v, target);
            return Some((first, i));
        }
        seen.insert(v, i);
    }
    None
}
