use std::collections::HashMap;

use tracing::trace;

use crate::Pair;

/// Tests every `(i, j)` with `i < j` in row-major order.
/// Returns the lexicographically smallest matching pair and never allocates.
///
/// ```
/// use pair_sum::{quadratic, Pair};
///
/// assert_eq!(quadratic(&[3, 2, 4], 6), Some(Pair::new(1, 2)));
/// assert_eq!(quadratic(&[1, 2, 3], 100), None);
/// ```
pub fn quadratic(nums: &[i32], target: i32) -> Option<Pair> {
    for (i, &ni) in nums.iter().enumerate() {
        for (j, &nj) in nums.iter().enumerate().skip(i + 1) {
            // An overflowing sum can't equal an i32 target
            if ni.checked_add(nj) == Some(target) {
                trace!(first = i, second = j, "quadratic scan found pair");
                return Some(Pair::new(i, j));
            }
        }
    }

    None
}

/// Single forward pass, remembering the first index each value was seen at.
/// Returns the pair with the smallest possible second index.
///
/// ```
/// use pair_sum::{lookup, Pair};
///
/// assert_eq!(lookup(&[2, 7, 11, 15], 9), Some(Pair::new(0, 1)));
/// assert_eq!(lookup(&[], 5), None);
/// ```
pub fn lookup(nums: &[i32], target: i32) -> Option<Pair> {
    if nums.len() < 2 {
        return None;
    }

    let mut index_by_num: HashMap<i32, usize> = HashMap::with_capacity(nums.len());

    for (i, &n) in nums.iter().enumerate() {
        // No i32 in the input can equal a complement that overflows
        if let Some(complement) = target.checked_sub(n) {
            if let Some(&idx) = index_by_num.get(&complement) {
                trace!(first = idx, second = i, "lookup scan found pair");
                return Some(Pair::new(idx, i));
            }
        }

        index_by_num.entry(n).or_insert(i);
    }

    None
}
