//! DBInspector Common Library
//!
//! Shared types, utilities, and error handling for the DBInspector workspace.
//!
//! # Overview
//!
//! This crate provides the pieces every other member builds on:
//!
//! - **Error Handling**: [`DbiError`] and the [`Result`] alias
//! - **Configuration**: the explicit cache root ([`config::CacheConfig`])
//! - **Types**: the RefSeq and UniProt record model
//! - **Store**: the two persisted accession-to-record mappings
//! - **Checksums**: SHA-256 digests of persisted snapshots
//! - **Logging**: `tracing` subscriber setup shared by the binaries
//!
//! # Example
//!
//! ```no_run
//! use dbi_common::config::CacheConfig;
//! use dbi_common::store::RecordStore;
//!
//! fn count_records() -> dbi_common::Result<usize> {
//!     let store = RecordStore::new(CacheConfig::from_env()?);
//!     let snapshot = store.load()?;
//!     Ok(snapshot.refseq.len() + snapshot.uniprot.len())
//! }
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod checksum;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{DbiError, Result};
pub use types::{Hit, RefSeqRecord, RefSeqRecords, Snapshot, UniProtRecord, UniProtRecords};
