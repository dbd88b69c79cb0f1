//! Record model shared by the ingest and query crates
//!
//! Both databases use the same record shape: gene symbols, a cross-reference
//! into the other database, and the amino-acid sequence. They differ in the
//! cardinality of the cross-reference, so each side has its own type:
//!
//! - a RefSeq record points at no more than one UniProt accession
//! - a UniProt record points at any number of RefSeq accessions
//!
//! The persisted field names (`symbol`, `UniProt ID`, `RefSeq ID`,
//! `sequence`) are part of the on-disk format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// RefSeq accession -> record
pub type RefSeqRecords = BTreeMap<String, RefSeqRecord>;

/// UniProt accession -> record
pub type UniProtRecords = BTreeMap<String, UniProtRecord>;

/// One RefSeq protein entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefSeqRecord {
    /// Gene symbol(s), first-seen order, no duplicates
    #[serde(rename = "symbol", default)]
    pub symbols: Vec<String>,

    /// The UniProt accession this protein maps to
    #[serde(rename = "UniProt ID", default)]
    pub uniprot_id: Option<String>,

    /// Amino-acid sequence
    #[serde(default)]
    pub sequence: Option<String>,
}

/// One UniProt entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniProtRecord {
    /// Primary gene names and synonyms, first-seen order, no duplicates
    #[serde(rename = "symbol", default)]
    pub symbols: Vec<String>,

    /// RefSeq accessions referenced by this entry, no duplicates
    #[serde(rename = "RefSeq ID", default)]
    pub refseq_ids: Vec<String>,

    /// Amino-acid sequence
    #[serde(default)]
    pub sequence: Option<String>,
}

impl RefSeqRecord {
    /// Whether `symbol` is listed exactly (case-sensitive)
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    /// Sequence, treating an empty string as unknown
    pub fn known_sequence(&self) -> Option<&str> {
        self.sequence.as_deref().filter(|s| !s.is_empty())
    }
}

impl UniProtRecord {
    /// Whether `symbol` is listed exactly (case-sensitive)
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    /// Whether `refseq_id` is one of this entry's cross-references
    pub fn references(&self, refseq_id: &str) -> bool {
        self.refseq_ids.iter().any(|id| id == refseq_id)
    }

    /// Sequence, treating an empty string as unknown
    pub fn known_sequence(&self) -> Option<&str> {
        self.sequence.as_deref().filter(|s| !s.is_empty())
    }

    /// Append a symbol unless it is already present
    pub fn push_symbol(&mut self, symbol: String) {
        if !self.has_symbol(&symbol) {
            self.symbols.push(symbol);
        }
    }

    /// Append a RefSeq cross-reference unless it is already present
    pub fn push_refseq_id(&mut self, refseq_id: String) {
        if !self.references(&refseq_id) {
            self.refseq_ids.push(refseq_id);
        }
    }
}

/// A record together with the accession it was stored under
///
/// The accession is attached at lookup time; it is not part of the
/// persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit<R> {
    pub accession: String,
    #[serde(flatten)]
    pub record: R,
}

impl<R: Clone> Hit<R> {
    pub fn new(accession: impl Into<String>, record: &R) -> Self {
        Self {
            accession: accession.into(),
            record: record.clone(),
        }
    }
}

/// Both mappings, as loaded from one read of the persisted store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub refseq: RefSeqRecords,
    pub uniprot: UniProtRecords,
}

impl Snapshot {
    pub fn new(refseq: RefSeqRecords, uniprot: UniProtRecords) -> Self {
        Self { refseq, uniprot }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_refseq_record_field_names() {
        let record = RefSeqRecord {
            symbols: vec!["ZNF655".to_string()],
            uniprot_id: Some("Q8N720".to_string()),
            sequence: Some("MEEIPAQ".to_string()),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"symbol":["ZNF655"],"UniProt ID":"Q8N720","sequence":"MEEIPAQ"}"#
        );
    }

    #[test]
    fn test_uniprot_record_reads_nulls() {
        let record: UniProtRecord =
            serde_json::from_str(r#"{"symbol": [], "RefSeq ID": [], "sequence": null}"#).unwrap();
        assert_eq!(record, UniProtRecord::default());
        assert_eq!(record.known_sequence(), None);
    }

    #[test]
    fn test_push_suppresses_duplicates() {
        let mut record = UniProtRecord::default();
        record.push_symbol("MACIR".to_string());
        record.push_symbol("C5orf30".to_string());
        record.push_symbol("MACIR".to_string());
        record.push_refseq_id("NP_149988.1".to_string());
        record.push_refseq_id("NP_149988.1".to_string());

        assert_eq!(record.symbols, vec!["MACIR", "C5orf30"]);
        assert_eq!(record.refseq_ids, vec!["NP_149988.1"]);
    }

    #[test]
    fn test_empty_sequence_is_unknown() {
        let record = RefSeqRecord {
            sequence: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(record.known_sequence(), None);
    }

    #[test]
    fn test_hit_flattens_record() {
        let hit = Hit::new(
            "rsid1",
            &RefSeqRecord {
                symbols: vec!["ONE".to_string()],
                uniprot_id: None,
                sequence: None,
            },
        );
        let value = serde_json::to_value(&hit).unwrap();
        assert_eq!(value["accession"], "rsid1");
        assert_eq!(value["symbol"][0], "ONE");
    }
}
