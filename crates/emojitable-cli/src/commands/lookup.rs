//! Lookup command
//!
//! Usage: emojitable lookup [--table <FILE>] <QUERY>

use clap::Args;
use emojitable_core::ShortcodeIndex;
use emojitable_store::{read_table, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Table written by `generate`
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub table: PathBuf,

    /// A short name (`grinning` or `:grinning:`) or an emoji
    pub query: String,
}

/// Execute lookup command
///
/// Prints the emoji for a short name, or `:short_name:` for an emoji.
pub fn execute(args: LookupArgs) -> Result<(), Box<dyn std::error::Error>> {
    let index = ShortcodeIndex::new(read_table(&args.table)?);

    if let Some(emoji) = index.unicode(&args.query) {
        println!("{}", emoji);
    } else if let Some(short_name) = index.shortcode(&args.query) {
        println!(":{}:", short_name);
    } else {
        return Err(format!("No emoji found for '{}'", args.query).into());
    }

    Ok(())
}
