//! Record assembly
//!
//! Merges the partial mappings produced by the source readers into the two
//! persisted mappings. Every parse pass is a full rebuild: both mappings are
//! replaced wholesale.

use crate::sources::collab::RefSeqToUniProt;
use crate::sources::fasta::RefSeqSequences;
use crate::sources::gene_table::ProteinSymbols;
use crate::sources::{
    parse_collab_table, parse_gene_table, parse_sequence_archive, parse_uniprot_document,
};
use dbi_common::config::CacheConfig;
use dbi_common::store::RecordStore;
use dbi_common::{DbiError, RefSeqRecord, RefSeqRecords, Result};
use indicatif::ProgressBar;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Outcome of a full parse pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    pub uniprot_records: usize,
    pub refseq_records: usize,
    /// SHA-256 of the persisted UniProt mapping
    pub uniprot_checksum: String,
    /// SHA-256 of the persisted RefSeq mapping
    pub refseq_checksum: String,
}

/// Build the RefSeq mapping
///
/// The sequence archive decides which accessions exist. Symbols are looked
/// up by the full versioned accession; the collab table is versionless, so
/// the UniProt cross-reference is looked up by the accession base.
pub fn assemble_refseq(
    sequences: RefSeqSequences,
    symbols: &ProteinSymbols,
    collab: &RefSeqToUniProt,
) -> RefSeqRecords {
    sequences
        .into_iter()
        .map(|(accession, sequence)| {
            let record = RefSeqRecord {
                symbols: symbols.get(&accession).cloned().unwrap_or_default(),
                uniprot_id: collab.get(accession_base(&accession)).cloned(),
                sequence: Some(sequence),
            };
            (accession, record)
        })
        .collect()
}

/// `NP_149988.1` -> `NP_149988`
fn accession_base(accession: &str) -> &str {
    accession
        .split_once('.')
        .map_or(accession, |(base, _)| base)
}

/// Run a full parse pass over the raw downloads under `config`
///
/// Nothing is persisted unless every source parses; a failed pass leaves
/// the previous mappings in place.
pub fn parse_all(config: &CacheConfig) -> Result<ParseSummary> {
    parse_all_with_progress(config, &ProgressBar::hidden())
}

/// [`parse_all`], reporting the current stage on `progress`
pub fn parse_all_with_progress(
    config: &CacheConfig,
    progress: &ProgressBar,
) -> Result<ParseSummary> {
    check_inputs(config)?;
    config.ensure_dirs()?;
    let store = RecordStore::new(config.clone());
    let start = Instant::now();

    progress.set_message("Parsing UniProt document...");
    let stage = Instant::now();
    let uniprot = parse_uniprot_document(&config.uniprot_xml_path())?;
    info!(
        records = uniprot.len(),
        elapsed_secs = stage.elapsed().as_secs_f64(),
        "Finished parsing the UniProt document"
    );

    progress.set_message("Reading RefSeq mapping tables...");
    let stage = Instant::now();
    let collab = parse_collab_table(&config.collab_table_path())?;
    let symbols = parse_gene_table(&config.gene_table_path())?;
    info!(
        collab_pairs = collab.len(),
        gene_symbols = symbols.len(),
        elapsed_secs = stage.elapsed().as_secs_f64(),
        "Finished reading the RefSeq mapping tables"
    );

    progress.set_message("Parsing RefSeq sequence archive...");
    let stage = Instant::now();
    let sequences = parse_sequence_archive(&config.refseq_fasta_dir())?;
    let refseq = assemble_refseq(sequences, &symbols, &collab);
    info!(
        records = refseq.len(),
        elapsed_secs = stage.elapsed().as_secs_f64(),
        "Finished parsing the RefSeq sequence archive"
    );

    // Both mappings are written only once every source has been read
    progress.set_message("Saving mappings...");
    let uniprot_checksum = store.save_uniprot(&uniprot)?;
    let refseq_checksum = store.save_refseq(&refseq)?;

    info!(
        elapsed_secs = start.elapsed().as_secs_f64(),
        "Parse pass complete"
    );

    Ok(ParseSummary {
        uniprot_records: uniprot.len(),
        refseq_records: refseq.len(),
        uniprot_checksum,
        refseq_checksum,
    })
}

/// Fail with `FileMissing` for the first raw input that is absent
fn check_inputs(config: &CacheConfig) -> Result<()> {
    let required: [(PathBuf, bool); 4] = [
        (config.uniprot_xml_path(), false),
        (config.collab_table_path(), false),
        (config.gene_table_path(), false),
        (config.refseq_fasta_dir(), true),
    ];

    for (path, is_dir) in required {
        let present = if is_dir { path.is_dir() } else { path.is_file() };
        if !present {
            return Err(DbiError::file_missing(path));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn sequences(pairs: &[(&str, &str)]) -> RefSeqSequences {
        pairs
            .iter()
            .map(|(a, s)| (a.to_string(), s.to_string()))
            .collect()
    }

    #[test]
    fn test_accession_base() {
        assert_eq!(accession_base("NP_149988.1"), "NP_149988");
        assert_eq!(accession_base("NP_149988"), "NP_149988");
    }

    #[test]
    fn test_assemble_refseq() {
        let mut symbols = ProteinSymbols::new();
        symbols.insert("NP_149988.1".to_string(), vec!["MACIR".to_string()]);
        // Versioned lookups only; a different version does not match
        symbols.insert("NP_000005.2".to_string(), vec!["A2M".to_string()]);

        let mut collab = RefSeqToUniProt::new();
        collab.insert("NP_149988".to_string(), "Q96GV9".to_string());
        collab.insert("NP_000005".to_string(), "P01023".to_string());

        let records = assemble_refseq(
            sequences(&[
                ("NP_149988.1", "MEVDINGES"),
                ("NP_000005.3", "MGKNK"),
                ("NP_999999.1", ""),
            ]),
            &symbols,
            &collab,
        );

        assert_eq!(records.len(), 3);
        let macir = &records["NP_149988.1"];
        assert_eq!(macir.symbols, vec!["MACIR"]);
        assert_eq!(macir.uniprot_id.as_deref(), Some("Q96GV9"));
        assert_eq!(macir.sequence.as_deref(), Some("MEVDINGES"));

        let a2m = &records["NP_000005.3"];
        assert!(a2m.symbols.is_empty());
        assert_eq!(a2m.uniprot_id.as_deref(), Some("P01023"));

        let bare = &records["NP_999999.1"];
        assert_eq!(bare.uniprot_id, None);
        assert_eq!(bare.sequence.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_all_requires_inputs() {
        let tmp = tempfile::tempdir().unwrap();
        let config = CacheConfig::new(tmp.path());

        match parse_all(&config) {
            Err(DbiError::FileMissing(path)) => assert_eq!(path, config.uniprot_xml_path()),
            other => panic!("expected FileMissing, got {:?}", other),
        }
    }
}
