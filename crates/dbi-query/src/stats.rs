//! Database-wide consensus statistics
//!
//! Every RefSeq/UniProt pair that either database records as equivalent is
//! checked for agreement on five categories. Pairs are found in two passes:
//!
//! 1. each RefSeq record whose UniProt cross-reference exists in UniProt
//! 2. each RefSeq accession listed by a UniProt record, unless that RefSeq
//!    record already points back at the same UniProt accession (counted in
//!    pass 1)
//!
//! A RefSeq record without a UniProt cross-reference is therefore counted in
//! pass 2 whenever a UniProt record lists it.

use crate::resolve::Resolver;
use dbi_common::{RefSeqRecord, Result, Snapshot, UniProtRecord};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::info;

/// Column headers of the rendered summary
pub const SUMMARY_HEADER: [&str; 4] = [
    "",
    "Number of matches",
    "Matching UniProt entries [%]",
    "Matching RefSeq entries [%]",
];

/// Attribute checked for agreement between paired records
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Category {
    Symbol,
    RefSeqId,
    UniProtId,
    Sequence,
    SequenceLength,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Symbol,
        Category::RefSeqId,
        Category::UniProtId,
        Category::Sequence,
        Category::SequenceLength,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Symbol => "Symbol",
            Category::RefSeqId => "RefSeq ID",
            Category::UniProtId => "UniProt ID",
            Category::Sequence => "Sequence",
            Category::SequenceLength => "Sequence length",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which database's cross-reference produced the pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    FromRefSeq,
    FromUniProt,
}

/// Agreement counts for one category
#[derive(Debug, Default)]
struct Tally<'a> {
    matches: usize,
    uniprot: BTreeSet<&'a str>,
    refseq: BTreeSet<&'a str>,
}

#[derive(Debug, Default)]
struct Consensus<'a> {
    tallies: [Tally<'a>; 5],
}

impl<'a> Consensus<'a> {
    fn hit(&mut self, category: Category, refseq_id: &'a str, uniprot_id: &'a str) {
        let tally = &mut self.tallies[category.index()];
        tally.matches += 1;
        tally.uniprot.insert(uniprot_id);
        tally.refseq.insert(refseq_id);
    }

    fn update(
        &mut self,
        refseq_id: &'a str,
        refseq: &RefSeqRecord,
        uniprot_id: &'a str,
        uniprot: &UniProtRecord,
        direction: Direction,
    ) {
        // RefSeq lists at most one symbol; UniProt includes synonyms
        if refseq
            .symbols
            .first()
            .is_some_and(|symbol| uniprot.has_symbol(symbol))
        {
            self.hit(Category::Symbol, refseq_id, uniprot_id);
        }

        let uniprot_agrees = match direction {
            Direction::FromRefSeq => true,
            Direction::FromUniProt => refseq.uniprot_id.as_deref() == Some(uniprot_id),
        };
        let refseq_agrees = match direction {
            Direction::FromRefSeq => uniprot.references(refseq_id),
            Direction::FromUniProt => true,
        };
        if refseq_agrees {
            self.hit(Category::RefSeqId, refseq_id, uniprot_id);
        }
        if uniprot_agrees {
            self.hit(Category::UniProtId, refseq_id, uniprot_id);
        }

        if let (Some(a), Some(b)) = (refseq.known_sequence(), uniprot.known_sequence()) {
            if a == b {
                self.hit(Category::Sequence, refseq_id, uniprot_id);
                self.hit(Category::SequenceLength, refseq_id, uniprot_id);
            } else if a.len() == b.len() {
                self.hit(Category::SequenceLength, refseq_id, uniprot_id);
            }
        }
    }
}

/// One category of the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub category: Category,
    /// Number of agreeing pairs
    pub matches: usize,
    /// Distinct agreeing UniProt entries over all UniProt entries
    pub uniprot_fraction: f64,
    /// Distinct agreeing RefSeq entries over all RefSeq entries
    pub refseq_fraction: f64,
}

impl SummaryRow {
    pub fn uniprot_percent(&self) -> String {
        format_percent(self.uniprot_fraction)
    }

    pub fn refseq_percent(&self) -> String {
        format_percent(self.refseq_fraction)
    }
}

/// Agreement rates between the two databases
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    pub uniprot_entries: usize,
    pub refseq_entries: usize,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn header(&self) -> Vec<String> {
        SUMMARY_HEADER.iter().map(|h| h.to_string()).collect()
    }

    /// Body rows as display strings, one per category
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                vec![
                    row.category.label().to_string(),
                    row.matches.to_string(),
                    row.uniprot_percent(),
                    row.refseq_percent(),
                ]
            })
            .collect()
    }

    pub fn row(&self, category: Category) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.category == category)
    }
}

/// `0.4444..` -> `"44.44%"`
fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

fn fraction(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Compute the consensus summary over an in-memory snapshot
pub fn summary_statistics(snapshot: &Snapshot) -> SummaryTable {
    let mut consensus = Consensus::default();

    for (refseq_id, refseq) in &snapshot.refseq {
        let Some(uniprot_id) = refseq.uniprot_id.as_deref() else {
            continue;
        };
        if let Some((uniprot_id, uniprot)) = snapshot.uniprot.get_key_value(uniprot_id) {
            consensus.update(refseq_id, refseq, uniprot_id, uniprot, Direction::FromRefSeq);
        }
    }

    for (uniprot_id, uniprot) in &snapshot.uniprot {
        for refseq_id in &uniprot.refseq_ids {
            let Some((refseq_id, refseq)) = snapshot.refseq.get_key_value(refseq_id) else {
                continue;
            };
            if refseq.uniprot_id.as_deref() != Some(uniprot_id.as_str()) {
                consensus.update(refseq_id, refseq, uniprot_id, uniprot, Direction::FromUniProt);
            }
        }
    }

    let uniprot_entries = snapshot.uniprot.len();
    let refseq_entries = snapshot.refseq.len();

    let rows = Category::ALL
        .iter()
        .zip(&consensus.tallies)
        .map(|(&category, tally)| SummaryRow {
            category,
            matches: tally.matches,
            uniprot_fraction: fraction(tally.uniprot.len(), uniprot_entries),
            refseq_fraction: fraction(tally.refseq.len(), refseq_entries),
        })
        .collect();

    SummaryTable {
        uniprot_entries,
        refseq_entries,
        rows,
    }
}

impl Resolver {
    /// Consensus summary over the current persisted mappings
    pub fn summary_statistics(&self) -> Result<SummaryTable> {
        info!("Producing database summary statistics");
        let snapshot = self.snapshot()?;
        Ok(summary_statistics(&snapshot))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn pair(refseq_seq: &str, uniprot_seq: &str) -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot.refseq.insert(
            "NP_1.1".into(),
            RefSeqRecord {
                symbols: vec!["GENE".into()],
                uniprot_id: Some("P1".into()),
                sequence: Some(refseq_seq.into()),
            },
        );
        snapshot.uniprot.insert(
            "P1".into(),
            UniProtRecord {
                symbols: vec!["ALIAS".into(), "GENE".into()],
                refseq_ids: vec!["NP_1.1".into()],
                sequence: Some(uniprot_seq.into()),
            },
        );
        snapshot
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(4.0 / 9.0), "44.44%");
        assert_eq!(format_percent(5.0 / 9.0), "55.56%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(fraction(3, 0)), "0.00%");
    }

    #[test]
    fn test_fully_agreeing_pair() {
        let table = summary_statistics(&pair("MKT", "MKT"));
        for category in Category::ALL {
            let row = table.row(category).unwrap();
            assert_eq!(row.matches, 1, "{:?}", category);
            assert_eq!(row.uniprot_percent(), "100.00%");
            assert_eq!(row.refseq_percent(), "100.00%");
        }
    }

    #[test]
    fn test_length_agreement_without_sequence_agreement() {
        let table = summary_statistics(&pair("MKT", "MKV"));
        assert_eq!(table.row(Category::Sequence).unwrap().matches, 0);
        assert_eq!(table.row(Category::SequenceLength).unwrap().matches, 1);
    }

    #[test]
    fn test_empty_sequences_do_not_agree() {
        let table = summary_statistics(&pair("", ""));
        assert_eq!(table.row(Category::Sequence).unwrap().matches, 0);
        assert_eq!(table.row(Category::SequenceLength).unwrap().matches, 0);
    }

    #[test]
    fn test_string_rows() {
        let table = summary_statistics(&pair("MKT", "MKT"));
        let rows = table.string_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1], vec!["RefSeq ID", "1", "100.00%", "100.00%"]);
        assert_eq!(table.header()[1], "Number of matches");
    }

    #[test]
    fn test_empty_snapshot() {
        let table = summary_statistics(&Snapshot::default());
        assert!(table.rows.iter().all(|r| r.matches == 0));
        assert!(table.string_rows().iter().all(|r| r[2] == "0.00%"));
    }
}
