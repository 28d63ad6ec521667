//! xmd CLI - generates a Markdown wiki from an XML documentation export.
//!
//! Takes the export file as its single argument, builds the type registry
//! and writes one reference page per documented type plus the index page
//! into the configured output directory.

mod error;
mod generate;
mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use output::Output;

/// xmd - generate a Markdown wiki from an XML documentation export.
#[derive(Parser)]
#[command(name = "xmd", version, about)]
struct Cli {
    /// Path to the XML documentation file.
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Log level comes from RUST_LOG; default is quiet.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = generate::run(&cli.input, &output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
