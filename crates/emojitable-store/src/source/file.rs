//! Local file source, for regenerating from a saved upstream document

use super::{parse_records, RecordSource};
use crate::errors::{fetch_error, Result};
use emojitable_core::core_types::schema::OP_FETCH;
use emojitable_core::{log_op_end, log_op_error, log_op_start};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_records(&self) -> Result<Vec<Value>> {
        let start = Instant::now();
        let name = self.describe();
        log_op_start!(OP_FETCH, source = %name);

        let result = std::fs::read(&self.path)
            .map_err(|e| fetch_error(&name, e))
            .and_then(|body| parse_records(&name, &body));

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

/// Read a local text document, e.g. a saved variation sequences list
///
/// # Errors
///
/// `EmojiTableError::Fetch` naming the path if it cannot be read as UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| fetch_error(&path.display().to_string(), e))
}
