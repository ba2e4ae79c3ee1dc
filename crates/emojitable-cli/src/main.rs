//! emojitable CLI
//!
//! Regenerates the emoji short name -> text table and queries it.
//! With no subcommand it runs `generate` with every default.

use clap::{Parser, Subcommand, ValueEnum};
use emojitable_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "emojitable")]
#[command(about = "Build the emoji short name -> text table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log output format (logs go to stderr; filter with RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Download the upstream metadata and write the table (default)
    Generate(commands::generate::GenerateArgs),
    /// Look up an emoji by short name, or a short name by emoji
    Lookup(commands::lookup::LookupArgs),
    /// Replace :short_name: codes in a text
    Replace(commands::replace::ReplaceArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn profile(self) -> Profile {
        match self {
            LogFormat::Text => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format.profile());

    let result = match cli.command {
        None => commands::generate::execute(Default::default()),
        Some(Commands::Generate(args)) => commands::generate::execute(args),
        Some(Commands::Lookup(args)) => commands::lookup::execute(args),
        Some(Commands::Replace(args)) => commands::replace::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
