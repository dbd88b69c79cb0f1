//! `dbi database-summary` command implementation

use crate::error::Result;
use crate::output::output_results;
use crate::OutputFormat;
use dbi_common::config::CacheConfig;
use dbi_query::Resolver;
use std::path::Path;

/// Print the consensus statistics over the whole cache
pub fn run(config: &CacheConfig, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    let resolver = Resolver::from_config(config.clone());
    let table = resolver.summary_statistics()?;
    output_results(&table, format, output_file)
}
