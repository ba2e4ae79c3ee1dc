//! Unified-code decoding
//!
//! Upstream encodes an emoji as its code points in hex joined by `-`,
//! e.g. `1F468-200D-1F469` or `0023-FE0F`.

use crate::errors::{EmojiTableError, Result};

/// Longest chunk accepted; eight hex digits cover every `u32`
const MAX_CHUNK_DIGITS: usize = 8;

/// Decode a unified code into the text it encodes
///
/// Each hyphen-separated chunk becomes exactly one `char`, in order.
/// Hex digits are case-insensitive.
///
/// # Errors
///
/// Returns `EmojiTableError::InvalidUnified` if any chunk is empty, longer
/// than eight digits, not hexadecimal, or not a Unicode scalar value
/// (surrogates and values above `U+10FFFF`).
///
/// # Example
///
/// ```
/// use emojitable_core::unified_to_unicode;
///
/// assert_eq!(unified_to_unicode("0023-FE0F").unwrap(), "#\u{FE0F}");
/// ```
pub fn unified_to_unicode(unified: &str) -> Result<String> {
    unified
        .split('-')
        .map(|chunk| decode_chunk(unified, chunk))
        .collect()
}

fn decode_chunk(unified: &str, chunk: &str) -> Result<char> {
    let invalid = |reason: &str| EmojiTableError::InvalidUnified {
        unified: unified.to_string(),
        chunk: chunk.to_string(),
        reason: reason.to_string(),
    };

    if chunk.is_empty() {
        return Err(invalid("is empty"));
    }
    if chunk.len() > MAX_CHUNK_DIGITS {
        return Err(invalid("has more than 8 hex digits"));
    }
    // from_str_radix would also accept a leading '+'
    if !chunk.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid("is not hexadecimal"));
    }

    let code_point = u32::from_str_radix(chunk, 16).map_err(|e| invalid(&e.to_string()))?;
    char::from_u32(code_point).ok_or_else(|| invalid("is not a Unicode scalar value"))
}
