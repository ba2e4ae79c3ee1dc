//! Emoji presentation variation sequences
//!
//! Parses Unicode's `emoji-variation-sequences.txt`. Lines look like:
//!
//! ```text
//! 0023 FE0E  ; text style;  # (1.1) NUMBER SIGN
//! 0023 FE0F  ; emoji style; # (1.1) NUMBER SIGN
//! ```
//!
//! Only the base code point of each `emoji style` line is kept.

use std::collections::HashSet;

/// The variation selector requesting emoji presentation
pub const EMOJI_PRESENTATION_SELECTOR: char = '\u{FE0F}';

const EMOJI_STYLE: &str = "emoji style";

/// Base code points (uppercase hex, as upstream spells `unified`) that have
/// an emoji-style variation sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariationSequences {
    bases: HashSet<String>,
}

impl VariationSequences {
    /// Parse the text of `emoji-variation-sequences.txt`
    ///
    /// Comment lines, blank lines and non-emoji-style sequences are skipped.
    pub fn parse(text: &str) -> Self {
        let bases = text
            .lines()
            .filter_map(|line| {
                let data = line.split('#').next().unwrap_or("");
                let mut fields = data.split(';').map(str::trim);
                let sequence = fields.next()?;
                if fields.next()? != EMOJI_STYLE {
                    return None;
                }
                sequence
                    .split_whitespace()
                    .next()
                    .map(str::to_ascii_uppercase)
            })
            .collect();
        Self { bases }
    }

    /// Whether a record with this `unified` code needs `U+FE0F` appended
    pub fn needs_selector(&self, unified: &str) -> bool {
        self.bases.contains(unified)
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}
