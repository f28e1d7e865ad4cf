//! Google Sheets catalog source client.
//!
//! The catalog lives in a spreadsheet and is read with one
//! `values:batchGet` request per sheet, each carrying the A1 ranges of the
//! row batches that sheet holds. The response is reduced to ordered batches
//! of string cells; everything category-specific happens in the adapter.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::config::SheetsConfig;

/// Google Sheets API base URL.
const BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Fallback when the error body carries no usable message.
const GENERIC_FETCH_ERROR: &str =
    "Could not load catalog data. Check the API key and the sheet's access settings.";

/// Errors that can occur when fetching catalog data.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Sheets API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request URL could not be built.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

/// One contiguous range of rows, each row an ordered sequence of cells.
pub type RowBatch = Vec<Vec<String>>;

/// Client for the spreadsheet holding the catalog.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: reqwest::Client,
    spreadsheet_id: String,
    api_key: SecretString,
}

impl SheetsClient {
    /// Create a new client for the configured spreadsheet.
    #[must_use]
    pub fn new(config: &SheetsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch one row batch per requested range, in request order.
    ///
    /// Ranges the sheet answers with no `values` field for (entirely empty
    /// ranges) come back as empty batches, so the result always has exactly
    /// `ranges.len()` entries.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Api`] for non-2xx responses, carrying the
    /// message from the error body when one is present, and
    /// [`SheetsError::Http`] for transport failures. Individual malformed
    /// rows are not an error at this layer.
    pub async fn batch_get(
        &self,
        sheet: &str,
        ranges: &[&str],
    ) -> Result<Vec<RowBatch>, SheetsError> {
        let mut url = Url::parse(&format!(
            "{BASE_URL}/{}/values:batchGet",
            self.spreadsheet_id
        ))?;
        {
            let mut pairs = url.query_pairs_mut();
            for range in ranges {
                pairs.append_pair("ranges", &format!("'{sheet}'!{range}"));
            }
            pairs.append_pair("key", self.api_key.expose_secret());
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %sheet, "catalog fetch failed");
            return Err(SheetsError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let body: BatchGetResponse = response.json().await?;
        Ok(body.into_batches(ranges.len()))
    }
}

/// Pull the human-readable message out of a Sheets API error body.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_FETCH_ERROR.to_string())
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct BatchGetResponse {
    #[serde(rename = "valueRanges", default)]
    value_ranges: Vec<ValueRange>,
}

impl BatchGetResponse {
    /// One batch per requested range, in request order. The API omits
    /// trailing entirely-empty ranges; those are padded back as empty
    /// batches.
    fn into_batches(self, range_count: usize) -> Vec<RowBatch> {
        let mut batches: Vec<RowBatch> = self
            .value_ranges
            .into_iter()
            .map(ValueRange::into_rows)
            .collect();
        batches.resize_with(range_count, RowBatch::default);
        batches
    }
}

#[derive(Debug, Deserialize, Default)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl ValueRange {
    /// Reduce cells to strings; the sheet occasionally yields bare numbers.
    fn into_rows(self) -> RowBatch {
        self.values
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| match cell {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}
