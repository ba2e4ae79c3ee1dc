//! Emoji table store - everything that touches the network or the disk
//!
//! Provides:
//! - Record sources: the upstream HTTP document or a local copy of it
//! - Atomic table writer and reader
//! - The generate pipeline (fetch, build, write)

pub mod errors;
pub mod generate;
pub mod source;
pub mod writer;

pub use generate::{generate, GenerateReport};
pub use source::{FileSource, HttpSource, RecordSource};
pub use writer::{read_table, write_table, OutputStyle};

/// Upstream emoji metadata document
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/iamcal/emoji-data/master/emoji.json";

/// Unicode emoji variation sequences, used to add `U+FE0F` where needed
pub const VARIATION_SEQUENCES_URL: &str =
    "https://www.unicode.org/Public/15.1.0/ucd/emoji/emoji-variation-sequences.txt";

/// Where the table is written when no output path is given
pub const DEFAULT_OUTPUT_PATH: &str = "emoji.json";
