//! Emoji table building
//!
//! Turns the upstream record array into the short name -> emoji text table.
//! Records are processed in input order; a repeated short name overwrites the
//! earlier value but keeps the earlier position.

use crate::core_types::schema::OP_BUILD;
use crate::errors::{EmojiTableError, Result};
use crate::record::EmojiRecord;
use crate::unified::unified_to_unicode;
use crate::variation::{VariationSequences, EMOJI_PRESENTATION_SELECTOR};
use crate::{log_op_end, log_op_error, log_op_start};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Separator between a short name and its skin tone suffix
pub const SKIN_TONE_SEPARATOR: &str = "::";

/// Short name -> literal emoji text, in first-insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiTable {
    entries: IndexMap<String, String>,
}

impl EmojiTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry, returning the previous value
    pub fn insert(&mut self, short_name: impl Into<String>, emoji: impl Into<String>) -> Option<String> {
        self.entries.insert(short_name.into(), emoji.into())
    }

    pub fn get(&self, short_name: &str) -> Option<&str> {
        self.entries.get(short_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a table previously written as a JSON object
    ///
    /// # Errors
    ///
    /// `Serialization` if the text is not a JSON object of strings.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EmojiTableError::Serialization {
            message: e.to_string(),
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EmojiTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

/// Optional enrichments applied while building
///
/// The default reproduces the plain short name -> unified mapping.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Add `<short_name>::skin-tone-N` entries for each skin variation
    pub skin_tones: bool,
    /// Append `U+FE0F` to emojis whose base has an emoji-style sequence
    pub variation_sequences: Option<VariationSequences>,
}

/// Build the table from the upstream record array
///
/// # Errors
///
/// Fails on the first record that lacks `short_name`/`unified`
/// (`MissingField`, `InvalidField`), whose code does not decode
/// (`InvalidUnified`), or, with skin tones enabled, whose variation key is
/// not made of skin tone modifiers (`UnknownSkinTone`). No partial table is
/// returned.
pub fn build_table(records: &[Value], options: &BuildOptions) -> Result<EmojiTable> {
    let start = Instant::now();
    log_op_start!(OP_BUILD, record_count = records.len());

    match build_entries(records, options) {
        Ok(table) => {
            log_op_end!(
                OP_BUILD,
                duration_ms = start.elapsed().as_millis() as u64,
                table_len = table.len()
            );
            Ok(table)
        }
        Err(err) => {
            log_op_error!(OP_BUILD, &err, duration_ms = start.elapsed().as_millis() as u64);
            Err(err)
        }
    }
}

fn build_entries(records: &[Value], options: &BuildOptions) -> Result<EmojiTable> {
    let mut table = EmojiTable::new();

    for (index, value) in records.iter().enumerate() {
        let record = EmojiRecord::from_value(index, value, options.skin_tones)?;

        let mut emoji = unified_to_unicode(&record.unified)?;
        if let Some(vs) = &options.variation_sequences {
            if vs.needs_selector(&record.unified) {
                emoji.push(EMOJI_PRESENTATION_SELECTOR);
            }
        }
        insert_logged(&mut table, record.short_name.clone(), emoji);

        for (key, variation) in &record.skin_variations {
            let name = format!(
                "{}{}{}",
                record.short_name,
                SKIN_TONE_SEPARATOR,
                skin_tone_id(&record.short_name, key)?
            );
            insert_logged(&mut table, name, unified_to_unicode(&variation.unified)?);
        }
    }

    Ok(table)
}

fn insert_logged(table: &mut EmojiTable, short_name: String, emoji: String) {
    tracing::trace!(short_name = %short_name, "adding emoji");
    if let Some(previous) = table.entries.get(&short_name) {
        tracing::debug!(
            short_name = %short_name,
            previous = %previous,
            replacement = %emoji,
            "duplicate short name, keeping the later value"
        );
    }
    table.insert(short_name, emoji);
}

/// Map a skin variation key such as `1F3FB-1F3FD` to `skin-tone-2-4`
fn skin_tone_id(short_name: &str, key: &str) -> Result<String> {
    let tones = key
        .split('-')
        .map(|part| match part.to_ascii_uppercase().as_str() {
            "1F3FB" => Ok("2"),
            "1F3FC" => Ok("3"),
            "1F3FD" => Ok("4"),
            "1F3FE" => Ok("5"),
            "1F3FF" => Ok("6"),
            _ => Err(EmojiTableError::UnknownSkinTone {
                short_name: short_name.to_string(),
                key: key.to_string(),
            }),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("skin-tone-{}", tones.join("-")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skin_tone_id_single_and_pair() {
        assert_eq!(skin_tone_id("wave", "1F3FB").unwrap(), "skin-tone-2");
        assert_eq!(skin_tone_id("wave", "1f3ff").unwrap(), "skin-tone-6");
        assert_eq!(
            skin_tone_id("handshake", "1F3FC-1F3FE").unwrap(),
            "skin-tone-3-5"
        );
    }

    #[test]
    fn test_skin_tone_id_unknown() {
        let err = skin_tone_id("wave", "1F3FB-1F600").unwrap_err();
        assert_eq!(
            err,
            EmojiTableError::UnknownSkinTone {
                short_name: "wave".to_string(),
                key: "1F3FB-1F600".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_keeps_first_position_last_value() {
        let records = vec![
            json!({"short_name": "a", "unified": "0031"}),
            json!({"short_name": "b", "unified": "0032"}),
            json!({"short_name": "a", "unified": "0033"}),
        ];
        let table = build_table(&records, &BuildOptions::default()).unwrap();
        let entries: Vec<(&str, &str)> = table.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_from_iter_and_json() {
        let table: EmojiTable = [("grinning", "\u{1F600}")].into_iter().collect();
        let parsed = EmojiTable::from_json_str("{\"grinning\":\"\u{1F600}\"}").unwrap();
        assert_eq!(table, parsed);
    }

    #[test]
    fn test_from_json_rejects_non_string_values() {
        let err = EmojiTable::from_json_str("{\"grinning\": 1}").unwrap_err();
        assert!(matches!(err, EmojiTableError::Serialization { .. }));
    }
}
