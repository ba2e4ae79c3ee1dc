//! Error helpers for emojitable-store
//!
//! Wraps emojitable-core's EmojiTableError with IO-flavoured constructors

use emojitable_core::errors::EmojiTableError;
use std::path::Path;

pub use emojitable_core::errors::Result;

/// Create a fetch error for a URL or local source
pub fn fetch_error(source_name: &str, reason: impl std::fmt::Display) -> EmojiTableError {
    EmojiTableError::Fetch {
        source_name: source_name.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a write error for an output path
pub fn write_error(path: &Path, reason: impl std::fmt::Display) -> EmojiTableError {
    EmojiTableError::Write {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Create a read error for a local file
pub fn io_error(path: &Path, err: std::io::Error) -> EmojiTableError {
    EmojiTableError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
