//! Record sources
//!
//! The table builder consumes the upstream document as a list of untyped
//! JSON records. Where those come from is behind `RecordSource`.

mod file;
mod http;

pub use file::{read_text, FileSource};
pub use http::HttpSource;

use crate::errors::{fetch_error, Result};
use serde_json::Value;

/// Something that yields the upstream emoji record array
pub trait RecordSource {
    /// Human-readable origin (URL or path), used in logs and errors
    fn describe(&self) -> String;

    /// Retrieve and parse the records
    ///
    /// # Errors
    ///
    /// `EmojiTableError::Fetch` when the document cannot be retrieved, is
    /// not JSON, or is not a JSON array.
    fn fetch_records(&self) -> Result<Vec<Value>>;
}

/// Parse a raw upstream body into its record array
pub(crate) fn parse_records(source_name: &str, body: &[u8]) -> Result<Vec<Value>> {
    let document: Value = serde_json::from_slice(body)
        .map_err(|e| fetch_error(source_name, format!("malformed JSON body: {}", e)))?;
    match document {
        Value::Array(records) => Ok(records),
        _ => Err(fetch_error(
            source_name,
            "expected a JSON array of emoji records",
        )),
    }
}
