// src/newsgroups/client.rs
use std::time::Duration;

use reqwest::header;

use crate::corpus::NewsgroupCollection;
use crate::extractors::cleaning;
use crate::newsgroups::models::{Remove, RowsResponse, Subset};
use crate::utils::error::DataSourceError;

const DATASETS_USER_AGENT: &str = concat!("docgen/", env!("CARGO_PKG_VERSION"));
const DATASETS_SERVER_BASE: &str = "https://datasets-server.huggingface.co";
/// Hub id of the dataset carrying the 20 Newsgroups corpus.
const DATASET_ID: &str = "SetFit/20_newsgroups";
const DATASET_CONFIG: &str = "default";
/// The rows endpoint caps page length at 100.
const PAGE_LENGTH: usize = 100;
// Stay well under the anonymous request quota. >100ms delay.
const REQUEST_DELAY_MS: u64 = 150;

/// HTTP client for the Hugging Face datasets-server rows API.
pub struct NewsgroupsClient {
    http: reqwest::Client,
    base_url: String,
}

impl NewsgroupsClient {
    pub fn new() -> Result<Self, DataSourceError> {
        Ok(Self {
            http: build_http_client()?,
            base_url: DATASETS_SERVER_BASE.to_string(),
        })
    }

    /// Points the client at a different server, for tests against a
    /// local mock.
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, DataSourceError> {
        Ok(Self {
            http: build_http_client()?,
            base_url: base_url.into(),
        })
    }

    /// Materializes the requested subset as an ordered collection with
    /// the requested structural elements already stripped.
    ///
    /// When `limit` is given, fetching stops once that many records are
    /// in hand; the server's row order is preserved either way, with
    /// train rows ahead of test rows for `Subset::All`.
    pub async fn fetch_collection(
        &self,
        subset: Subset,
        remove: Remove,
        limit: Option<usize>,
    ) -> Result<NewsgroupCollection, DataSourceError> {
        let mut records: Vec<String> = Vec::new();

        for &split in subset.splits() {
            if let Some(limit) = limit {
                if records.len() >= limit {
                    break;
                }
            }
            self.fetch_split(split, remove, limit, &mut records).await?;
        }

        tracing::info!("Materialized {} records from {}", records.len(), DATASET_ID);
        Ok(NewsgroupCollection::new(records))
    }

    async fn fetch_split(
        &self,
        split: &str,
        remove: Remove,
        limit: Option<usize>,
        records: &mut Vec<String>,
    ) -> Result<(), DataSourceError> {
        let mut offset = 0usize;

        loop {
            let wanted = match limit {
                Some(limit) if records.len() >= limit => return Ok(()),
                Some(limit) => (limit - records.len()).min(PAGE_LENGTH),
                None => PAGE_LENGTH,
            };

            let page = self.fetch_page(split, offset, wanted).await?;
            let page_len = page.rows.len();

            for entry in page.rows {
                records.push(cleaning::clean_record(&entry.row.text, remove));
            }

            offset += page_len;
            if page_len == 0 || offset >= page.num_rows_total as usize {
                return Ok(());
            }
        }
    }

    async fn fetch_page(
        &self,
        split: &str,
        offset: usize,
        length: usize,
    ) -> Result<RowsResponse, DataSourceError> {
        let url = format!("{}/rows", self.base_url);
        tracing::debug!(
            "Requesting rows: split={} offset={} length={}",
            split,
            offset,
            length
        );

        // --- Basic Rate Limiting ---
        tokio::time::sleep(Duration::from_millis(REQUEST_DELAY_MS)).await;
        // ---------------------------

        let params = [
            ("dataset", DATASET_ID.to_string()),
            ("config", DATASET_CONFIG.to_string()),
            ("split", split.to_string()),
            ("offset", offset.to_string()),
            ("length", length.to_string()),
        ];

        let response = self
            .http
            .get(&url)
            .query(&params)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?; // Propagates reqwest::Error as DataSourceError::Network

        let status = response.status();
        if !status.is_success() {
            tracing::error!("HTTP error status: {} for split: {}", status, split);
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                tracing::warn!("Received 429 Too Many Requests - slow down or authenticate.");
                return Err(DataSourceError::RateLimited);
            }
            if status == reqwest::StatusCode::NOT_FOUND {
                tracing::warn!("Received 404 Not Found for split: {}", split);
                return Err(DataSourceError::SplitNotFound(split.to_string()));
            }
            return Err(DataSourceError::Http(status));
        }

        let page: RowsResponse = response
            .json()
            .await
            .map_err(|e| DataSourceError::Parse(e.to_string()))?;
        tracing::debug!(
            "Received {} rows (total {}) for split {}",
            page.rows.len(),
            page.num_rows_total,
            split
        );

        Ok(page)
    }
}

fn build_http_client() -> Result<reqwest::Client, DataSourceError> {
    let client = reqwest::Client::builder()
        .user_agent(DATASETS_USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()?;
    Ok(client)
}
