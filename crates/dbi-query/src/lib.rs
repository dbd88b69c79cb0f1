//! DBInspector Query Library
//!
//! Read-only operations over the persisted RefSeq and UniProt mappings:
//!
//! - **Query**: classify free text as a RefSeq ID, UniProt ID or gene symbol
//! - **Resolve**: find every matching record in both databases
//! - **Compare**: align the matches side by side and flag identical sequences
//! - **Statistics**: database-wide agreement rates across five categories
//!
//! The pure functions ([`resolve`], [`compare`], [`summary_statistics`])
//! work on an in-memory [`Snapshot`](dbi_common::Snapshot). [`Resolver`]
//! wraps them and reloads the persisted mappings on every call.
//!
//! # Example
//!
//! ```no_run
//! use dbi_common::config::CacheConfig;
//! use dbi_query::{Query, Resolver};
//!
//! fn main() -> dbi_common::Result<()> {
//!     let resolver = Resolver::from_config(CacheConfig::from_env()?);
//!     let table = resolver.compare_entries(&Query::classify("NP_149988.1")?)?;
//!     println!("{} columns", table.columns.len());
//!     Ok(())
//! }
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod compare;
pub mod query;
pub mod resolve;
pub mod stats;

pub use compare::{compare, ComparisonColumn, ComparisonTable};
pub use query::{Query, QueryClassifier};
pub use resolve::{resolve, Resolution, Resolver};
pub use stats::{summary_statistics, Category, SummaryRow, SummaryTable};
