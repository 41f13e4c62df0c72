use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::{error::Error, scan, Pair};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Nested loop, O(n^2) time and no allocation
    Quadratic,
    /// Single pass over a value -> first index table, O(n) expected time
    #[default]
    Lookup,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Quadratic, Strategy::Lookup];

    pub fn find(self, nums: &[i32], target: i32) -> Option<Pair> {
        match self {
            Strategy::Quadratic => scan::quadratic(nums, target),
            Strategy::Lookup => scan::lookup(nums, target),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Quadratic => "quadratic",
            Strategy::Lookup => "lookup",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quadratic" | "brute-force" | "brute_force" => Ok(Strategy::Quadratic),
            "lookup" | "hashmap" | "hash-map" => Ok(Strategy::Lookup),
            _ => Err(Error::UnknownStrategy(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lookup() {
        assert_eq!(Strategy::Lookup, Strategy::default());
    }

    #[test]
    fn parse() {
        assert_eq!(Ok(Strategy::Quadratic), "quadratic".parse());
        assert_eq!(Ok(Strategy::Quadratic), "Brute-Force".parse());
        assert_eq!(Ok(Strategy::Lookup), " HashMap ".parse());
        assert_eq!(Ok(Strategy::Lookup), "lookup".parse());
    }

    #[test]
    fn parse_unknown() {
        let result = "sorted".parse::<Strategy>();
        assert_eq!(Err(Error::UnknownStrategy("sorted".into())), result);
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for strategy in Strategy::ALL {
            assert_eq!(Ok(strategy), strategy.to_string().parse());
        }
    }

    #[test]
    fn find_dispatches() {
        let nums = [1, 2, 3, 4];

        assert_eq!(Some(Pair::new(0, 3)), Strategy::Quadratic.find(&nums, 5));
        assert_eq!(Some(Pair::new(1, 2)), Strategy::Lookup.find(&nums, 5));
    }
}
