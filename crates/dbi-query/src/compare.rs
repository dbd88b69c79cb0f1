//! Side-by-side comparison of resolved records
//!
//! UniProt columns come first, then RefSeq columns, each numbered from 1.
//! A database without matches gets a single empty placeholder column.

use crate::query::Query;
use crate::resolve::{resolve, Resolution, Resolver};
use dbi_common::{DbiError, Hit, RefSeqRecord, Result, Snapshot, UniProtRecord};
use serde::Serialize;
use tracing::{info, warn};

/// Row labels, in display order
pub const ROW_LABELS: [&str; 6] = [
    "symbol",
    "UniProt ID",
    "RefSeq ID",
    "sequence",
    "sequence matches",
    "sequence length",
];

/// One record (or placeholder) in a comparison table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonColumn {
    pub label: String,
    #[serde(rename = "symbol")]
    pub symbols: Vec<String>,
    #[serde(rename = "UniProt ID")]
    pub uniprot_ids: Vec<String>,
    #[serde(rename = "RefSeq ID")]
    pub refseq_ids: Vec<String>,
    pub sequence: Option<String>,
    /// Labels of the other columns carrying the identical sequence
    #[serde(rename = "sequence matches")]
    pub sequence_matches: Vec<String>,
    #[serde(rename = "sequence length")]
    pub sequence_length: Option<usize>,
}

impl ComparisonColumn {
    fn placeholder(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Default::default()
        }
    }

    fn from_uniprot(label: String, hit: &Hit<UniProtRecord>) -> Self {
        Self {
            label,
            symbols: hit.record.symbols.clone(),
            uniprot_ids: vec![hit.accession.clone()],
            refseq_ids: hit.record.refseq_ids.clone(),
            sequence_length: hit.record.sequence.as_ref().map(String::len),
            sequence: hit.record.sequence.clone(),
            sequence_matches: Vec::new(),
        }
    }

    fn from_refseq(label: String, hit: &Hit<RefSeqRecord>) -> Self {
        Self {
            label,
            symbols: hit.record.symbols.clone(),
            uniprot_ids: hit.record.uniprot_id.iter().cloned().collect(),
            refseq_ids: vec![hit.accession.clone()],
            sequence_length: hit.record.sequence.as_ref().map(String::len),
            sequence: hit.record.sequence.clone(),
            sequence_matches: Vec::new(),
        }
    }

    fn known_sequence(&self) -> Option<&str> {
        self.sequence.as_deref().filter(|s| !s.is_empty())
    }

    /// Cell text for each row of [`ROW_LABELS`]; lists are joined with `", "`
    pub fn cells(&self) -> [String; 6] {
        [
            self.symbols.join(", "),
            self.uniprot_ids.join(", "),
            self.refseq_ids.join(", "),
            self.sequence.clone().unwrap_or_default(),
            self.sequence_matches.join(", "),
            self.sequence_length
                .map(|len| len.to_string())
                .unwrap_or_default(),
        ]
    }
}

/// Aligned view of every record matching one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    pub query: Query,
    pub columns: Vec<ComparisonColumn>,
}

impl ComparisonTable {
    /// Column header line: an empty corner cell, then every column label
    pub fn header(&self) -> Vec<String> {
        std::iter::once(String::new())
            .chain(self.columns.iter().map(|c| c.label.clone()))
            .collect()
    }

    /// Body rows: the row label, then one cell per column
    pub fn rows(&self) -> Vec<Vec<String>> {
        let cells: Vec<[String; 6]> = self.columns.iter().map(ComparisonColumn::cells).collect();

        ROW_LABELS
            .iter()
            .enumerate()
            .map(|(row, label)| {
                std::iter::once(label.to_string())
                    .chain(cells.iter().map(|c| c[row].clone()))
                    .collect()
            })
            .collect()
    }

    pub fn column(&self, label: &str) -> Option<&ComparisonColumn> {
        self.columns.iter().find(|c| c.label == label)
    }
}

/// Build the comparison table for `query` against an in-memory snapshot
pub fn compare(snapshot: &Snapshot, query: &Query) -> Result<ComparisonTable> {
    let resolution = resolve(snapshot, query);
    build_table(query, &resolution)
}

/// Lay out a resolution as a comparison table
///
/// Fails with `QueryNotFound` when neither database matched.
pub fn build_table(query: &Query, resolution: &Resolution) -> Result<ComparisonTable> {
    if resolution.is_empty() {
        warn!(query = %query, kind = query.kind(), "Query could not be found");
        return Err(DbiError::query_not_found(query.identifier()));
    }

    let mut columns = Vec::with_capacity(resolution.uniprot.len() + resolution.refseq.len());

    if resolution.uniprot.is_empty() {
        columns.push(ComparisonColumn::placeholder("No UniProt entry"));
    }
    for (i, hit) in resolution.uniprot.iter().enumerate() {
        columns.push(ComparisonColumn::from_uniprot(format!("UniProt entry {}", i + 1), hit));
    }

    if resolution.refseq.is_empty() {
        columns.push(ComparisonColumn::placeholder("No RefSeq entry"));
    }
    for (i, hit) in resolution.refseq.iter().enumerate() {
        columns.push(ComparisonColumn::from_refseq(format!("RefSeq entry {}", i + 1), hit));
    }

    mark_sequence_matches(&mut columns);

    info!(query = %query, columns = columns.len(), "Found entries");
    Ok(ComparisonTable {
        query: query.clone(),
        columns,
    })
}

/// Fill `sequence_matches` for every column sharing its sequence with another
fn mark_sequence_matches(columns: &mut [ComparisonColumn]) {
    let matches: Vec<Vec<String>> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| match column.known_sequence() {
            Some(sequence) => columns
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && other.known_sequence() == Some(sequence))
                .map(|(_, other)| other.label.clone())
                .collect(),
            None => Vec::new(),
        })
        .collect();

    for (column, found) in columns.iter_mut().zip(matches) {
        column.sequence_matches = found;
    }
}

impl Resolver {
    /// Comparison table for `query` against the current persisted mappings
    pub fn compare_entries(&self, query: &Query) -> Result<ComparisonTable> {
        info!(query = %query, kind = query.kind(), "Searching for entries matching query");
        let resolution = self.resolve(query)?;
        build_table(query, &resolution)
    }
}
