//! The signed-in identity record.

use serde::{Deserialize, Serialize};

use crate::types::email::Email;

/// The single optional signed-in identity.
///
/// There is no credential verification anywhere in the system: login and
/// registration both replace the identity wholesale with whatever email the
/// visitor supplied. The record carries nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: Email,
}

impl Identity {
    /// Create an identity for the given email.
    #[must_use]
    pub const fn new(email: Email) -> Self {
        Self { email }
    }
}
