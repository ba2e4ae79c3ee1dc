//! Upstream HTTP source
//!
//! One blocking GET per call. No retries and no timeout override.

use super::{parse_records, RecordSource};
use crate::errors::{fetch_error, Result};
use emojitable_core::core_types::schema::OP_FETCH;
use emojitable_core::{log_op_end, log_op_error, log_op_start};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Instant;

const USER_AGENT: &str = concat!("emojitable/", env!("CARGO_PKG_VERSION"));

/// Fetches the emoji record array from a URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    /// Source backed by a default blocking client
    ///
    /// # Errors
    ///
    /// `EmojiTableError::Fetch` if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let client = build_client().map_err(|e| fetch_error(&url, e))?;
        Ok(Self { url, client })
    }

    /// Source backed by a caller-configured client
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET another text document with the same client, e.g. the variation
    /// sequences list
    ///
    /// # Errors
    ///
    /// `EmojiTableError::Fetch` on connection failure, non-success status or
    /// a body that is not UTF-8.
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        let body = get_bytes(&self.client, url)?;
        String::from_utf8(body).map_err(|e| fetch_error(url, format!("body is not UTF-8: {}", e)))
    }
}

impl RecordSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch_records(&self) -> Result<Vec<Value>> {
        let start = Instant::now();
        log_op_start!(OP_FETCH, source = %self.url);

        let result = get_bytes(&self.client, &self.url)
            .and_then(|body| parse_records(&self.url, &body));

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(records) => {
                log_op_end!(OP_FETCH, duration_ms = duration_ms, record_count = records.len());
            }
            Err(err) => {
                log_op_error!(OP_FETCH, err, duration_ms = duration_ms);
            }
        }
        result
    }
}

fn build_client() -> reqwest::Result<Client> {
    Client::builder().user_agent(USER_AGENT).build()
}

fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().map_err(|e| fetch_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch_error(url, format!("HTTP status {}", status)));
    }

    let body = response
        .bytes()
        .map_err(|e| fetch_error(url, format!("failed to read body: {}", e)))?;
    tracing::debug!(url, bytes = body.len(), "downloaded");
    Ok(body.to_vec())
}
