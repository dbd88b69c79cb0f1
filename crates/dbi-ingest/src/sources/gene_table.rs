//! NCBI gene table (`LRG_RefSeqGene`)
//!
//! Tab-separated, one header row. Only the `Symbol` and `Protein` columns
//! are read; the remaining columns are ignored.

use dbi_common::{DbiError, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use super::open_source;

/// Protein accession -> gene symbols
pub type ProteinSymbols = BTreeMap<String, Vec<String>>;

const SYMBOL_COLUMN: &str = "Symbol";
const PROTEIN_COLUMN: &str = "Protein";

/// Parse the gene table at `path`
pub fn parse_gene_table(path: &Path) -> Result<ProteinSymbols> {
    debug!(path = %path.display(), "Parsing gene table");
    parse_reader(open_source(path)?)
}

/// Parse a gene table from any reader
///
/// Each protein maps to a single-element symbol list. A protein listed more
/// than once keeps the symbol of its last row.
pub fn parse_reader<R: std::io::Read>(reader: R) -> Result<ProteinSymbols> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let symbol_idx = column_index(&headers, SYMBOL_COLUMN)?;
    let protein_idx = column_index(&headers, PROTEIN_COLUMN)?;

    let mut mapping = ProteinSymbols::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable gene table row");
                skipped += 1;
                continue;
            },
        };

        let protein = record.get(protein_idx).map(str::trim).unwrap_or_default();
        let symbol = record.get(symbol_idx).map(str::trim).unwrap_or_default();

        if is_placeholder(protein) || symbol.is_empty() {
            skipped += 1;
            continue;
        }

        mapping.insert(protein.to_string(), vec![symbol.to_string()]);
    }

    debug!(proteins = mapping.len(), skipped, "Finished gene table");
    Ok(mapping)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| DbiError::Parse(format!("gene table has no '{}' column", name)))
}

/// Rows for non-coding transcripts carry no protein accession
fn is_placeholder(protein: &str) -> bool {
    protein.is_empty() || protein == "-" || protein.eq_ignore_ascii_case("na")
}
