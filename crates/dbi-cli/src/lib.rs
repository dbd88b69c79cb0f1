//! DBInspector CLI Library
//!
//! Command-line interface over the DBInspector cache.
//!
//! # Overview
//!
//! - **Parsing**: rebuild the RefSeq and UniProt mappings from the raw
//!   downloads (`dbi parse`)
//! - **Comparison**: show every record matching an identifier side by side
//!   (`dbi compare`)
//! - **Summary**: database-wide agreement statistics (`dbi database-summary`)

pub mod commands;
pub mod error;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use error::{CliError, Result};

use clap::{Parser, Subcommand, ValueEnum};
use dbi_common::config::{CacheConfig, CACHE_DIR_ENV};
use std::path::PathBuf;

/// DBInspector - reconcile RefSeq and UniProt protein records
#[derive(Parser, Debug)]
#[command(name = "dbi")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logs on the console)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Cache root (defaults to ~/.dbinspector)
    #[arg(long, env = CACHE_DIR_ENV, global = true)]
    pub cache_dir: Option<PathBuf>,
}

impl Cli {
    /// Cache configuration selected by `--cache-dir`, the environment, or
    /// the home-directory default
    pub fn cache_config(&self) -> Result<CacheConfig> {
        match &self.cache_dir {
            Some(dir) => Ok(CacheConfig::new(dir)),
            None => Ok(CacheConfig::new(CacheConfig::default_root()?)),
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rebuild the RefSeq and UniProt mappings from the raw downloads
    Parse,

    /// Compare every RefSeq and UniProt entry matching one identifier
    Compare {
        /// RefSeq ID, UniProt ID or gene symbol; the kind is detected
        query: Option<String>,

        /// Look up a RefSeq accession (e.g. NP_149988.1)
        #[arg(short = 'r', long)]
        refseq_id: Option<String>,

        /// Look up a UniProt accession (e.g. Q96GV9)
        #[arg(short = 'u', long)]
        uniprot_id: Option<String>,

        /// Look up a gene symbol (e.g. MACIR)
        #[arg(short = 's', long)]
        symbol: Option<String>,

        /// Write the table to a file instead of the terminal
        #[arg(short, long)]
        outfile: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Summarize agreement between the two databases
    DatabaseSummary {
        /// Write the table to a file instead of the terminal
        #[arg(short, long)]
        outfile: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

/// Rendering of result tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed table in the terminal; TSV when written to a file
    Table,
    /// Tab-separated values
    Tsv,
    /// Pretty-printed JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compare_args() {
        let cli = Cli::try_parse_from([
            "dbi",
            "--cache-dir",
            "/tmp/dbi",
            "compare",
            "--uniprot-id",
            "Q96GV9",
            "-f",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.cache_config().unwrap(), CacheConfig::new("/tmp/dbi"));
        match cli.command {
            Commands::Compare {
                query,
                uniprot_id,
                format,
                ..
            } => {
                assert_eq!(query, None);
                assert_eq!(uniprot_id.as_deref(), Some("Q96GV9"));
                assert_eq!(format, OutputFormat::Json);
            },
            other => panic!("unexpected command {:?}", other),
        }
    }
}
