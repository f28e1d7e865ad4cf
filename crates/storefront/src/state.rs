//! Application state shared across command handlers.

use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::checkout::Checkout;
use crate::config::MarketConfig;
use crate::services::EmailJsClient;
use crate::storage::SnapshotStore;

/// Shared handles to configuration and the external-service clients.
///
/// Cheaply cloneable via `Arc`. The mutable stores (cart, identity) are not
/// in here - each command opens them against [`AppState::snapshot_store`]
/// and owns them for the duration of the command.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: MarketConfig,
    catalog: CatalogClient,
    checkout: Checkout<EmailJsClient>,
}

impl AppState {
    /// Build the application state from loaded configuration.
    #[must_use]
    pub fn new(config: MarketConfig) -> Self {
        let catalog = CatalogClient::new(&config.sheets);
        let notifier = EmailJsClient::new(&config.emailjs);
        let checkout = Checkout::new(notifier, config.emailjs.from_name.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                checkout,
            }),
        }
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        &self.inner.config
    }

    /// The catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// The checkout flow.
    #[must_use]
    pub fn checkout(&self) -> &Checkout<EmailJsClient> {
        &self.inner.checkout
    }

    /// A snapshot store rooted at the configured data directory.
    #[must_use]
    pub fn snapshot_store(&self) -> SnapshotStore {
        SnapshotStore::new(self.inner.config.storage_dir.clone())
    }
}
