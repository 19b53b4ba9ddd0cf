use std::{fmt, num::ParseIntError, str::FromStr};

use redwood_tree::Combine;

/// The value type stored by the shell: a plain signed integer whose tier
/// sums wrap on overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(pub i64);

impl Combine for Integer {
    fn empty() -> Self {
        Integer(0)
    }

    fn combine(&self, other: &Self) -> Self {
        Integer(self.0.wrapping_add(other.0))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Integer)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer(value)
    }
}
