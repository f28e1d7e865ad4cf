//! Product identifier newtype.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a product within one catalog load.
///
/// Ids are derived by the catalog adapter from the product name, its
/// distinguishing attributes, the row index within its batch, and the
/// category tag. That makes them stable for the duration of a session and
/// unique across categories even when names repeat (e.g. the same CPU model
/// listed in both the desktop and the server range).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an already-derived id string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
