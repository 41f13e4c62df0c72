use crate::{Pair, Strategy};

/// LeetCode shaped entry point, `vec![i, j]` or an empty vec when there is no pair.
pub struct Solution;

impl Solution {
    pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {
        Self::two_sum_with(Strategy::Lookup, nums, target)
    }

    pub fn two_sum_brute_force(nums: Vec<i32>, target: i32) -> Vec<i32> {
        Self::two_sum_with(Strategy::Quadratic, nums, target)
    }

    fn two_sum_with(strategy: Strategy, nums: Vec<i32>, target: i32) -> Vec<i32> {
        match strategy.find(&nums, target) {
            Some(pair) => Self::to_indices(pair),
            None => Vec::new(),
        }
    }

    fn to_indices(pair: Pair) -> Vec<i32> {
        let (first, second) = pair.indices();

        // The i32 signature caps inputs at i32::MAX elements
        match (i32::try_from(first), i32::try_from(second)) {
            (Ok(first), Ok(second)) => vec![first, second],
            _ => unreachable!("pair {pair} does not fit in i32 indices"),
        }
    }
}
