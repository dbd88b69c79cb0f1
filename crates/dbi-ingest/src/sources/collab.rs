//! RefSeq / UniProtKB collaboration table
//!
//! Two whitespace-separated columns, versionless RefSeq accession then
//! UniProtKB accession, after a single header line.

use dbi_common::Result;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

use super::{is_protein_accession, open_source};

/// Versionless RefSeq accession -> UniProt accession
pub type RefSeqToUniProt = BTreeMap<String, String>;

/// Parse the collab table at `path`
pub fn parse_collab_table(path: &Path) -> Result<RefSeqToUniProt> {
    debug!(path = %path.display(), "Parsing collab table");
    parse_reader(open_source(path)?)
}

/// Parse a collab table from any buffered reader
///
/// Only `NP_` accessions are kept. Lines without exactly two columns are
/// ignored, and a repeated RefSeq accession keeps its last pairing.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<RefSeqToUniProt> {
    let mut mapping = RefSeqToUniProt::new();

    for line in reader.lines().skip(1) {
        let line = line?;
        let mut tokens = line.split_whitespace();

        let (Some(refseq), Some(uniprot), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            continue;
        };

        if is_protein_accession(refseq) {
            mapping.insert(refseq.to_string(), uniprot.to_string());
        }
    }

    debug!(pairs = mapping.len(), "Finished collab table");
    Ok(mapping)
}
