//! Generate command
//!
//! Usage: emojitable generate [--url <URL> | --input <PATH>] [--output <FILE>]

use clap::Args;
use emojitable_core::{BuildOptions, VariationSequences};
use emojitable_store::source::read_text;
use emojitable_store::{
    generate, FileSource, HttpSource, OutputStyle, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_URL,
    VARIATION_SEQUENCES_URL,
};
use std::path::PathBuf;

#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Upstream emoji.json URL (default: iamcal/emoji-data master)
    #[arg(long, conflicts_with = "input")]
    pub url: Option<String>,

    /// Read a saved upstream emoji.json instead of downloading it
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file path (default: emoji.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indent the output, one entry per line
    #[arg(long)]
    pub pretty: bool,

    /// Also emit <short_name>::skin-tone-N entries
    #[arg(long)]
    pub skin_tones: bool,

    /// Append U+FE0F where Unicode defines an emoji-style sequence
    /// (downloads the Unicode 15.1 variation sequences list)
    #[arg(long, conflicts_with = "variation_sequences_file")]
    pub variation_sequences: bool,

    /// Like --variation-sequences, from a saved emoji-variation-sequences.txt
    #[arg(long)]
    pub variation_sequences_file: Option<PathBuf>,
}

/// Execute generate command
pub fn execute(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
    let style = if args.pretty {
        OutputStyle::Pretty
    } else {
        OutputStyle::Compact
    };

    // Building the client does no IO; it is also used for the variation list
    let http = HttpSource::new(args.url.unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string()))?;

    let variation_sequences = match (&args.variation_sequences_file, args.variation_sequences) {
        (Some(path), _) => Some(VariationSequences::parse(&read_text(path)?)),
        (None, true) => Some(VariationSequences::parse(
            &http.fetch_text(VARIATION_SEQUENCES_URL)?,
        )),
        (None, false) => None,
    };

    let options = BuildOptions {
        skin_tones: args.skin_tones,
        variation_sequences,
    };

    let report = match &args.input {
        Some(path) => generate(&FileSource::new(path), &options, &output, style)?,
        None => generate(&http, &options, &output, style)?,
    };

    println!(
        "✓ Wrote {} emojis from {} records to {}",
        report.table_len,
        report.record_count,
        report.output.display()
    );

    Ok(())
}
