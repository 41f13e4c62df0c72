use std::fmt::{self, Display, Formatter};

/// Two distinct indices into the input whose values add up to the target.
///
/// Both strategies produce `first < second`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pair {
    pub first: usize,
    pub second: usize,
}

impl Pair {
    pub const fn new(first: usize, second: usize) -> Self {
        debug_assert!(first != second, "a pair needs two distinct indices");
        Self { first, second }
    }

    pub const fn indices(self) -> (usize, usize) {
        (self.first, self.second)
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
