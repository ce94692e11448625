//! Main entry point for the unrgssad CLI application.
//!
//! Parses the directory of an RGSSAD archive, prints one line per entry,
//! then extracts every entry.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use unrgssad::{Cli, LocalFileReader, RgssadExtractor};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let reader = LocalFileReader::new(&cli.archive)
        .with_context(|| format!("cannot open {}", cli.archive.display()))?;
    let extractor = RgssadExtractor::new(Arc::new(reader));

    // Each entry is listed as it is parsed; the whole directory is parsed
    // before anything is written
    let quiet = cli.quiet;
    let entries = extractor
        .list_entries_with(|entry| {
            if !quiet {
                println!("{entry}");
            }
        })
        .await
        .with_context(|| format!("cannot read directory of {}", cli.archive.display()))?;

    if cli.list {
        return Ok(());
    }

    let output_dir = cli.output_dir();
    extractor
        .extract_all(&entries, &output_dir)
        .await
        .with_context(|| format!("extraction into {} failed", output_dir.display()))?;

    Ok(())
}
