//! Replace command
//!
//! Usage: emojitable replace [--table <FILE>] <TEXT>

use clap::Args;
use emojitable_core::ShortcodeIndex;
use emojitable_store::{read_table, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReplaceArgs {
    /// Table written by `generate`
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub table: PathBuf,

    /// Text containing :short_name: codes
    pub text: String,
}

/// Execute replace command
pub fn execute(args: ReplaceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let index = ShortcodeIndex::new(read_table(&args.table)?);
    println!("{}", index.replace_shortcodes(&args.text));
    Ok(())
}
