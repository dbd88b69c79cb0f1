//! DBInspector Ingest Library
//!
//! Turns the raw downloads in the cache's `data/` directory into the two
//! persisted accession-to-record mappings.
//!
//! # Supported Sources
//!
//! - **UniProt**: the human Swiss-Prot XML document, streamed entry by entry
//! - **Gene table**: NCBI `LRG_RefSeqGene`, protein accession to gene symbol
//! - **Collab table**: RefSeq to UniProtKB accession pairs
//! - **RefSeq FASTA**: gzip-compressed protein sequence files
//!
//! # Example
//!
//! ```no_run
//! use dbi_common::config::CacheConfig;
//!
//! fn main() -> dbi_common::Result<()> {
//!     let summary = dbi_ingest::parse_all(&CacheConfig::from_env()?)?;
//!     println!("{} RefSeq records", summary.refseq_records);
//!     Ok(())
//! }
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod assemble;
pub mod sources;

pub use assemble::{assemble_refseq, parse_all, parse_all_with_progress, ParseSummary};
