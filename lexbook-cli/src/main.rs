//! # lexbook CLI
//!
//! Command-line interface for the lexbook glossary toolchain.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexbook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the glossary as one sorted AsciiDoc section
    Glossary {
        /// Input JSON file
        input: PathBuf,

        /// Output AsciiDoc file
        output: PathBuf,

        /// Section heading
        #[arg(long, default_value = "Glossary")]
        title: String,
    },

    /// Render the new-words and archaic-words AsciiDoc lists
    WordLists {
        /// Input JSON file
        input: PathBuf,

        /// Directory the word-list files are written into
        out_dir: PathBuf,
    },

    /// Validate the glossary JSON and report a summary
    Check {
        /// Input JSON file
        input: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Glossary {
            input,
            output,
            title,
        } => commands::render_glossary(&input, &output, &title),
        Commands::WordLists { input, out_dir } => commands::render_word_lists(&input, &out_dir),
        Commands::Check { input, json } => commands::check_dataset(&input, json),
    }
}
