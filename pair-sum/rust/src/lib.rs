//! Finds two distinct indices in a sequence whose values add up to a target.
//!
//! Two strategies are available, see [`Strategy`]. Both return `None` when
//! no pair exists, which is never confused with a real pair such as `(0, 0)`.

pub mod config;
pub mod error;
pub mod input;
pub mod lc;
mod pair;
mod scan;
mod strategy;

pub use error::{PairSumError, Result};
pub use pair::Pair;
pub use scan::{lookup, quadratic};
pub use strategy::Strategy;

/// Runs the given strategy over `nums`.
///
/// ```
/// use pair_sum::{find_pair, Pair, Strategy};
///
/// assert_eq!(find_pair(Strategy::Lookup, &[3, 3], 6), Some(Pair::new(0, 1)));
/// assert_eq!(find_pair(Strategy::Quadratic, &[1, 2, 3], 100), None);
/// ```
pub fn find_pair(strategy: Strategy, nums: &[i32], target: i32) -> Option<Pair> {
    strategy.find(nums, target)
}
