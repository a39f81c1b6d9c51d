//! ParserDoc CLI entry point.
//!
//! Extracts classes and enums from the given C# files and prints the merged
//! catalogs as JSON. Any extraction error aborts the run with no output.

use anyhow::{Context, Result};
use clap::Parser;
use parserdoc_core::{DuplicatePolicy, ExtractionSession, SessionConfig};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "parserdoc", version, about = "Extract C# classes and enums as JSON")]
struct Cli {
    /// C# source files to extract, in merge order (none yields empty catalogs)
    inputs: Vec<PathBuf>,

    /// What to do when a class or enum name is declared twice
    #[arg(long, value_name = "POLICY", default_value = "reject")]
    on_duplicate: DuplicatePolicy,

    /// Parse inputs on all cores (merge order is unchanged)
    #[arg(long)]
    parallel: bool,

    /// Write JSON here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut session = ExtractionSession::with_config(SessionConfig {
        duplicate_policy: cli.on_duplicate,
    });
    let summary = if cli.parallel {
        session.extract_paths_parallel(&cli.inputs)?
    } else {
        session.extract_paths(&cli.inputs)?
    };

    for skipped in &summary.skipped {
        eprintln!("skipped {} ({})", skipped.path.display(), skipped.reason);
    }
    eprintln!(
        "extracted {} input(s), skipped {}",
        summary.processed.len(),
        summary.skipped.len()
    );

    let catalogs = session.into_catalogs();
    let json = if cli.pretty {
        serde_json::to_string_pretty(&catalogs)?
    } else {
        serde_json::to_string(&catalogs)?
    };

    match &cli.output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", json),
    }

    Ok(())
}
