//! `dbi parse` command implementation
//!
//! Rebuilds both persisted mappings from the raw downloads in the cache.

use crate::error::Result;
use crate::progress::create_spinner;
use colored::Colorize;
use dbi_common::config::CacheConfig;
use tracing::info;

/// Run a full parse pass and print what was written
pub fn run(config: &CacheConfig) -> Result<()> {
    info!(cache_dir = %config.root().display(), "Starting parse pass");

    let spinner = create_spinner("Parsing raw downloads...");
    let result = dbi_ingest::parse_all_with_progress(config, &spinner);
    spinner.finish_and_clear();
    let summary = result?;

    println!("{}", "Parse complete:".cyan().bold());
    println!(
        "  UniProt records: {}  (sha256 {})",
        summary.uniprot_records,
        short_checksum(&summary.uniprot_checksum)
    );
    println!(
        "  RefSeq records:  {}  (sha256 {})",
        summary.refseq_records,
        short_checksum(&summary.refseq_checksum)
    );
    println!("  Cache dir:       {}", config.root().display());

    Ok(())
}

fn short_checksum(checksum: &str) -> &str {
    checksum.get(..16).unwrap_or(checksum)
}
