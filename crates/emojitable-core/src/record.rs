//! Upstream emoji records
//!
//! Records arrive as untyped JSON and are validated field by field, so a
//! missing `short_name` is reported with its position instead of failing the
//! whole document parse.

use crate::errors::{EmojiTableError, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const FIELD_SHORT_NAME: &str = "short_name";
pub const FIELD_UNIFIED: &str = "unified";
pub const FIELD_SKIN_VARIATIONS: &str = "skin_variations";

/// The fields of one upstream record that the table is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRecord {
    pub short_name: String,
    pub unified: String,
    /// Keyed by the modifier code points, e.g. `1F3FB` or `1F3FB-1F3FC`
    pub skin_variations: BTreeMap<String, SkinVariation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinVariation {
    pub unified: String,
}

impl EmojiRecord {
    /// Validate one element of the upstream array
    ///
    /// `index` is the element's position and is only used for error context.
    /// `skin_variations` is only read (and validated) when `with_skin_variations`
    /// is set; otherwise it is left empty.
    ///
    /// # Errors
    ///
    /// `MissingField` when `short_name` or `unified` is absent,
    /// `InvalidField` when the record is not an object or a field has the
    /// wrong type.
    pub fn from_value(index: usize, value: &Value, with_skin_variations: bool) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| EmojiTableError::InvalidField {
            index,
            field: "<record>".to_string(),
            reason: format!("expected an object, found {}", json_type(value)),
        })?;

        let short_name = required_str(index, object, FIELD_SHORT_NAME)?;
        let unified = required_str(index, object, FIELD_UNIFIED)?;
        let skin_variations = match object.get(FIELD_SKIN_VARIATIONS) {
            Some(raw) if with_skin_variations && !raw.is_null() => {
                parse_skin_variations(index, raw)?
            }
            _ => BTreeMap::new(),
        };

        Ok(Self {
            short_name,
            unified,
            skin_variations,
        })
    }
}

fn required_str(index: usize, object: &Map<String, Value>, field: &str) -> Result<String> {
    match object.get(field) {
        None | Some(Value::Null) => Err(EmojiTableError::MissingField {
            index,
            field: field.to_string(),
        }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(EmojiTableError::InvalidField {
            index,
            field: field.to_string(),
            reason: format!("expected a string, found {}", json_type(other)),
        }),
    }
}

fn parse_skin_variations(index: usize, raw: &Value) -> Result<BTreeMap<String, SkinVariation>> {
    let invalid = |reason: String| EmojiTableError::InvalidField {
        index,
        field: FIELD_SKIN_VARIATIONS.to_string(),
        reason,
    };

    let object = raw
        .as_object()
        .ok_or_else(|| invalid(format!("expected an object, found {}", json_type(raw))))?;

    object
        .iter()
        .map(|(key, variation)| {
            let unified = variation
                .get(FIELD_UNIFIED)
                .and_then(Value::as_str)
                .ok_or_else(|| invalid(format!("variation '{}' has no string 'unified'", key)))?;
            Ok((
                key.clone(),
                SkinVariation {
                    unified: unified.to_string(),
                },
            ))
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
