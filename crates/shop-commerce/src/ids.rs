//! Product identifiers.
//!
//! The catalog endpoint hands out stable integer ids. Wrapping them keeps
//! a product id from being confused with a quantity, which shares the
//! same integer representation in the cart map.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unique, stable product identifier.
///
/// Serializes as a bare integer, and as a string when used as a JSON
/// object key (`{"1": 3}`). Signed, so any integer key a saved cart
/// carries still decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Create an ID from its integer value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
