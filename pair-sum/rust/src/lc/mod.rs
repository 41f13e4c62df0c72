mod two_sum;

pub use two_sum::Solution;
