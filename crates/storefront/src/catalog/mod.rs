//! Product catalog: fetch, adapt, filter.
//!
//! [`CatalogClient`] is the facade the views use: it issues the batched
//! range reads for a category, runs the rows through the [`adapter`], and
//! returns typed records. Filtering stays in the views via [`filter`].

pub mod adapter;
pub mod filter;

use hvrdcr_market_core::{Category, Cpu, Motherboard, Product, ProductId, Ram};

use crate::config::SheetsConfig;
use crate::sheets::{SheetsClient, SheetsError};

/// Catalog facade over the spreadsheet source.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    sheets: SheetsClient,
    config: SheetsConfig,
}

impl CatalogClient {
    /// Create a catalog client for the configured spreadsheet layout.
    #[must_use]
    pub fn new(config: &SheetsConfig) -> Self {
        Self {
            sheets: SheetsClient::new(config),
            config: config.clone(),
        }
    }

    /// Fetch the CPU catalog: the desktop batch followed by the server
    /// batch, each tagged with its range's discriminator.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] when the fetch itself fails; malformed rows
    /// are dropped by the adapter, never an error.
    pub async fn fetch_cpus(&self) -> Result<Vec<Cpu>, SheetsError> {
        let batches = self
            .sheets
            .batch_get(
                &self.config.cpu_sheet,
                &[
                    self.config.cpu_desktop_range.as_str(),
                    self.config.cpu_server_range.as_str(),
                ],
            )
            .await?;

        let mut batches = batches.into_iter();
        let desktop = batches.next().unwrap_or_default();
        let server = batches.next().unwrap_or_default();

        let mut cpus = adapter::parse_cpu_rows(&desktop, false);
        cpus.extend(adapter::parse_cpu_rows(&server, true));
        tracing::debug!(count = cpus.len(), "loaded CPU catalog");
        Ok(cpus)
    }

    /// Fetch the motherboard and RAM catalogs, which share one sheet and
    /// one batched request.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] when the fetch itself fails.
    pub async fn fetch_motherboards_and_ram(
        &self,
    ) -> Result<(Vec<Motherboard>, Vec<Ram>), SheetsError> {
        let batches = self
            .sheets
            .batch_get(
                &self.config.mobo_ram_sheet,
                &[
                    self.config.mobo_range.as_str(),
                    self.config.ram_range.as_str(),
                ],
            )
            .await?;

        let mut batches = batches.into_iter();
        let mobo_rows = batches.next().unwrap_or_default();
        let ram_rows = batches.next().unwrap_or_default();

        let mobos = adapter::parse_motherboard_rows(&mobo_rows);
        let ram = adapter::parse_ram_rows(&ram_rows);
        tracing::debug!(
            motherboards = mobos.len(),
            ram = ram.len(),
            "loaded motherboard/RAM catalog"
        );
        Ok((mobos, ram))
    }

    /// Fetch one category and resolve a product id within it.
    ///
    /// This is how a catalog selection reaches the cart from the CLI: the
    /// id is only meaningful against a fresh load of its category.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] when the category fetch fails. An id that
    /// matches nothing in the loaded set yields `Ok(None)`.
    pub async fn find_product(
        &self,
        category: Category,
        id: &ProductId,
    ) -> Result<Option<Product>, SheetsError> {
        let product = match category {
            Category::Cpu => self
                .fetch_cpus()
                .await?
                .into_iter()
                .find(|cpu| &cpu.id == id)
                .map(Product::from),
            Category::Motherboard => self
                .fetch_motherboards_and_ram()
                .await?
                .0
                .into_iter()
                .find(|mobo| &mobo.id == id)
                .map(Product::from),
            Category::Ram => self
                .fetch_motherboards_and_ram()
                .await?
                .1
                .into_iter()
                .find(|ram| &ram.id == id)
                .map(Product::from),
        };
        Ok(product)
    }
}
