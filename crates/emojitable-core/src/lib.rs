//! Emoji table core - pure transformation kernel
//!
//! This crate turns upstream emoji metadata records into a
//! short name -> literal emoji text table:
//! - Unified-code decoding (hyphenated hex code points to text)
//! - Explicit record schema validation
//! - Table building with last-write-wins semantics
//! - Optional skin-tone variants and emoji-presentation selectors
//! - Shortcode lookup and replacement over a finished table
//!
//! Nothing here touches the network or the filesystem; see `emojitable-store`.

pub mod errors;
pub mod logging_facility;
pub mod lookup;
pub mod record;
pub mod table;
pub mod unified;
pub mod variation;

pub use emojitable_core_types as core_types;

// Re-export commonly used types
pub use errors::{EmojiTableError, ExError, ExErrorKind, Result};
pub use lookup::ShortcodeIndex;
pub use record::{EmojiRecord, SkinVariation};
pub use table::{build_table, BuildOptions, EmojiTable};
pub use unified::unified_to_unicode;
pub use variation::VariationSequences;
