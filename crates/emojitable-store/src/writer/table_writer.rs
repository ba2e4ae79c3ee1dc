//! JSON rendering of the emoji table

use super::atomic::atomic_write;
use crate::errors::{io_error, Result};
use emojitable_core::core_types::schema::OP_WRITE;
use emojitable_core::errors::EmojiTableError;
use emojitable_core::{log_op_end, log_op_error, log_op_start, EmojiTable};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;
use std::time::Instant;

/// How the JSON object is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Single line, no whitespace
    #[default]
    Compact,
    /// One entry per line, one-space indentation, trailing newline
    Pretty,
}

/// Render the table as JSON bytes
///
/// serde_json never escapes non-ASCII, so emoji are written literally.
pub fn serialize_table(table: &EmojiTable, style: OutputStyle) -> Result<Vec<u8>> {
    let to_err = |e: serde_json::Error| EmojiTableError::Serialization {
        message: e.to_string(),
    };

    match style {
        OutputStyle::Compact => serde_json::to_vec(table).map_err(to_err),
        OutputStyle::Pretty => {
            let mut buf = Vec::new();
            let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
            table.serialize(&mut ser).map_err(to_err)?;
            buf.push(b'\n');
            Ok(buf)
        }
    }
}

/// Write the table to `path`, replacing any existing file
///
/// # Errors
///
/// `EmojiTableError::Write` on any filesystem failure; the previous file (if
/// any) is left untouched in that case.
pub fn write_table(table: &EmojiTable, path: &Path, style: OutputStyle) -> Result<()> {
    let start = Instant::now();
    log_op_start!(OP_WRITE, path = %path.display(), table_len = table.len());

    let result = serialize_table(table, style).and_then(|bytes| atomic_write(path, &bytes));

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => {
            log_op_end!(OP_WRITE, duration_ms = duration_ms);
        }
        Err(err) => {
            log_op_error!(OP_WRITE, err, duration_ms = duration_ms);
        }
    }
    result
}

/// Load a table written by `write_table`
///
/// # Errors
///
/// `EmojiTableError::Io` if the file cannot be read,
/// `EmojiTableError::Serialization` if it is not a JSON object of strings.
pub fn read_table(path: &Path) -> Result<EmojiTable> {
    let json = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    EmojiTable::from_json_str(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EmojiTable {
        [("grinning", "😀"), ("hash", "#\u{FE0F}")].into_iter().collect()
    }

    #[test]
    fn test_compact_output() {
        let bytes = serialize_table(&sample(), OutputStyle::Compact).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "{\"grinning\":\"😀\",\"hash\":\"#\u{FE0F}\"}"
        );
    }

    #[test]
    fn test_pretty_output_uses_single_space_indent() {
        let bytes = serialize_table(&sample(), OutputStyle::Pretty).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "{\n \"grinning\": \"😀\",\n \"hash\": \"#\u{FE0F}\"\n}\n"
        );
    }

    #[test]
    fn test_empty_table() {
        let bytes = serialize_table(&EmojiTable::new(), OutputStyle::Compact).unwrap();
        assert_eq!(bytes, b"{}");
    }
}
