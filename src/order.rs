//! Pixel index orderings.
//!
//! The same tessellation carries two index spaces: *ring* order numbers
//! pixels along iso-latitude rings from the north pole southward, *nested*
//! order numbers them by quad-tree subdivision within each base facet. A
//! pixel index is meaningful only together with an (`nside`, [`Order`]) pair.

use std::fmt;
use std::str::FromStr;

use crate::errors::HealpixError;

/// Which of the two HEALPix index orderings a pixel index lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Order {
    /// Quad-tree subdivision order within each base facet.
    Nested,
    /// Iso-latitude ring order, north to south.
    Ring,
}

impl Order {
    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nested => "nested",
            Self::Ring => "ring",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = HealpixError;

    /// Parses `"nested"` or `"ring"`; anything else is [`HealpixError::InvalidOrder`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nested" => Ok(Self::Nested),
            "ring" => Ok(Self::Ring),
            _ => Err(HealpixError::InvalidOrder),
        }
    }
}
