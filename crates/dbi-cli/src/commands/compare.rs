//! `dbi compare` command implementation
//!
//! Finds equivalent RefSeq and UniProt entries for one identifier and shows
//! them side by side.

use crate::error::Result;
use crate::output::output_results;
use crate::OutputFormat;
use dbi_common::config::CacheConfig;
use dbi_common::DbiError;
use dbi_query::{Query, Resolver};
use std::path::Path;

/// Identifier arguments as given on the command line
#[derive(Debug, Clone, Default)]
pub struct QueryArgs {
    /// Free text, classified automatically
    pub query: Option<String>,
    pub refseq_id: Option<String>,
    pub uniprot_id: Option<String>,
    pub symbol: Option<String>,
}

impl QueryArgs {
    /// Turn the arguments into exactly one [`Query`]
    pub fn into_query(self) -> dbi_common::Result<Query> {
        let explicit = self.refseq_id.is_some() || self.uniprot_id.is_some() || self.symbol.is_some();

        match self.query {
            Some(_) if explicit => Err(DbiError::input("Too many queries were given")),
            Some(text) => Query::classify(&text),
            None => Query::from_parts(self.refseq_id, self.uniprot_id, self.symbol),
        }
    }
}

/// Compare the entries matching `args`
pub fn run(
    config: &CacheConfig,
    args: QueryArgs,
    format: OutputFormat,
    output_file: Option<&Path>,
) -> Result<()> {
    let query = args.into_query()?;
    let resolver = Resolver::from_config(config.clone());
    let table = resolver.compare_entries(&query)?;
    output_results(&table, format, output_file)
}
