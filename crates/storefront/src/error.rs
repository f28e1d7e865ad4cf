//! Application-level error aggregation.
//!
//! Each service module defines its own `thiserror` enum; `AppError` is the
//! top-level type command handlers return. Persistence failures never show
//! up here - the stores swallow them and degrade to an empty state.

use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::sheets::SheetsError;
use hvrdcr_market_core::EmailError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog fetch failed; the affected view shows this inline.
    #[error("Catalog error: {0}")]
    Catalog(#[from] SheetsError),

    /// Checkout failed; the cart is preserved and retry is allowed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// A supplied email address was invalid.
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    /// A referenced product id does not exist in the loaded catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AppError::UnknownProduct("mobo-B550-AM4-3".to_string());
        assert_eq!(err.to_string(), "Unknown product: mobo-B550-AM4-3");

        let err = AppError::Config(ConfigError::MissingEnvVar("EMAILJS_SERVICE_ID".into()));
        assert_eq!(
            err.to_string(),
            "Config error: Missing environment variable: EMAILJS_SERVICE_ID"
        );
    }
}
