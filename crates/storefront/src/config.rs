//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `HVRDCR_SPREADSHEET_ID` - Google Sheets spreadsheet with the catalog
//! - `HVRDCR_SHEETS_API_KEY` - Google Sheets API key
//! - `EMAILJS_SERVICE_ID` - EmailJS service routing the order notification
//! - `EMAILJS_TEMPLATE_ID` - EmailJS template shaping the message
//! - `EMAILJS_PUBLIC_KEY` - EmailJS public client key
//!
//! ## Optional
//! - `HVRDCR_DATA_DIR` - Directory for persisted cart/identity snapshots
//!   (default: `.hvrdcr-market`)
//! - `HVRDCR_FROM_NAME` - Sender label on order emails (default:
//!   `HVRDCR MARKET`)
//! - `HVRDCR_CPU_SHEET` / `HVRDCR_CPU_DESKTOP_RANGE` /
//!   `HVRDCR_CPU_SERVER_RANGE` - CPU sheet layout overrides
//! - `HVRDCR_MOBO_RAM_SHEET` / `HVRDCR_MOBO_RANGE` / `HVRDCR_RAM_RANGE` -
//!   Motherboard/RAM sheet layout overrides

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Top-level storefront configuration.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Catalog data source.
    pub sheets: SheetsConfig,
    /// Order notification service.
    pub emailjs: EmailJsConfig,
    /// Directory holding the persisted cart and identity snapshots.
    pub storage_dir: PathBuf,
}

/// Google Sheets catalog source configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct SheetsConfig {
    /// Spreadsheet identifier.
    pub spreadsheet_id: String,
    /// API key authorizing read access.
    pub api_key: SecretString,
    /// Sheet holding the CPU catalog.
    pub cpu_sheet: String,
    /// A1 range of the desktop CPU batch.
    pub cpu_desktop_range: String,
    /// A1 range of the server CPU batch.
    pub cpu_server_range: String,
    /// Sheet holding the motherboard and RAM catalogs.
    pub mobo_ram_sheet: String,
    /// A1 range of the motherboard batch.
    pub mobo_range: String,
    /// A1 range of the RAM batch.
    pub ram_range: String,
}

impl std::fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("api_key", &"[REDACTED]")
            .field("cpu_sheet", &self.cpu_sheet)
            .field("cpu_desktop_range", &self.cpu_desktop_range)
            .field("cpu_server_range", &self.cpu_server_range)
            .field("mobo_ram_sheet", &self.mobo_ram_sheet)
            .field("mobo_range", &self.mobo_range)
            .field("ram_range", &self.ram_range)
            .finish()
    }
}

/// EmailJS order notification configuration.
///
/// Implements `Debug` manually to redact the client key.
#[derive(Clone)]
pub struct EmailJsConfig {
    /// Service identifier (routes to the provider account).
    pub service_id: String,
    /// Template identifier (selects the message shape).
    pub template_id: String,
    /// Public client key authorizing the call.
    pub public_key: SecretString,
    /// Sender label shown on order emails.
    pub from_name: String,
}

impl std::fmt::Debug for EmailJsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailJsConfig")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &"[REDACTED]")
            .field("from_name", &self.from_name)
            .finish()
    }
}

impl MarketConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            sheets: SheetsConfig::from_env()?,
            emailjs: EmailJsConfig::from_env()?,
            storage_dir: PathBuf::from(get_env_or_default("HVRDCR_DATA_DIR", ".hvrdcr-market")),
        })
    }
}

impl SheetsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            spreadsheet_id: get_required_env("HVRDCR_SPREADSHEET_ID")?,
            api_key: get_required_secret("HVRDCR_SHEETS_API_KEY")?,
            cpu_sheet: get_env_or_default("HVRDCR_CPU_SHEET", "CPU AMD"),
            cpu_desktop_range: get_env_or_default("HVRDCR_CPU_DESKTOP_RANGE", "A5:C"),
            cpu_server_range: get_env_or_default("HVRDCR_CPU_SERVER_RANGE", "E5:G"),
            mobo_ram_sheet: get_env_or_default("HVRDCR_MOBO_RAM_SHEET", "MOBO RAM"),
            mobo_range: get_env_or_default("HVRDCR_MOBO_RANGE", "A5:E"),
            ram_range: get_env_or_default("HVRDCR_RAM_RANGE", "G5:L"),
        })
    }
}

impl EmailJsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            service_id: get_required_env("EMAILJS_SERVICE_ID")?,
            template_id: get_required_env("EMAILJS_TEMPLATE_ID")?,
            public_key: get_required_secret("EMAILJS_PUBLIC_KEY")?,
            from_name: get_env_or_default("HVRDCR_FROM_NAME", "HVRDCR MARKET"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sheets_config() -> SheetsConfig {
        SheetsConfig {
            spreadsheet_id: "spreadsheet-id".to_owned(),
            api_key: SecretString::from("sheets-api-key"),
            cpu_sheet: "CPU AMD".to_owned(),
            cpu_desktop_range: "A5:C".to_owned(),
            cpu_server_range: "E5:G".to_owned(),
            mobo_ram_sheet: "MOBO RAM".to_owned(),
            mobo_range: "A5:E".to_owned(),
            ram_range: "G5:L".to_owned(),
        }
    }

    #[test]
    fn test_sheets_debug_redacts_api_key() {
        let debug_output = format!("{:?}", sheets_config());
        assert!(debug_output.contains("spreadsheet-id"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("sheets-api-key"));
    }

    #[test]
    fn test_emailjs_debug_redacts_public_key() {
        let config = EmailJsConfig {
            service_id: "service_abc".to_owned(),
            template_id: "template_xyz".to_owned(),
            public_key: SecretString::from("client-key-value"),
            from_name: "HVRDCR MARKET".to_owned(),
        };
        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("service_abc"));
        assert!(debug_output.contains("template_xyz"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("client-key-value"));
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("HVRDCR_TEST_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn test_get_required_env_missing() {
        let err = get_required_env("HVRDCR_TEST_UNSET_VARIABLE").unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }
}
