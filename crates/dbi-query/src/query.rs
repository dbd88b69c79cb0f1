//! Query identifiers
//!
//! A query is exactly one of a RefSeq accession, a UniProt accession or a
//! gene symbol. It is built once at the boundary, either from free text or
//! from three optional arguments, and the rest of the crate only ever sees
//! the tagged value.

use dbi_common::{DbiError, Result};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// UniProtKB accession format, anchored at the start of the text
///
/// See: https://www.uniprot.org/help/accession_numbers
pub const UNIPROT_ACCESSION_PATTERN: &str =
    r"^(?:[OPQ][0-9][A-Z0-9]{3}[0-9]|[A-NR-Z][0-9]([A-Z][A-Z0-9]{2}[0-9]){1,2})";

/// Marker identifying RefSeq protein accessions
const REFSEQ_PROTEIN_MARKER: &str = "NP_";

/// A single lookup key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Query {
    RefSeq(String),
    UniProt(String),
    Symbol(String),
}

impl Query {
    /// Classify free text
    ///
    /// Text containing `NP_` is a RefSeq accession; text starting with a
    /// UniProt accession is a UniProt accession; anything else is a symbol.
    pub fn classify(text: &str) -> Result<Self> {
        QueryClassifier::new()?.classify(text)
    }

    /// Build a query from three optional identifiers, exactly one of which
    /// must be given and non-empty
    pub fn from_parts(
        refseq: Option<String>,
        uniprot: Option<String>,
        symbol: Option<String>,
    ) -> Result<Self> {
        let given: Vec<Query> = [
            refseq.map(Query::RefSeq),
            uniprot.map(Query::UniProt),
            symbol.map(Query::Symbol),
        ]
        .into_iter()
        .flatten()
        .collect();

        match given.as_slice() {
            [] => Err(DbiError::input("No query entered")),
            [query] if query.identifier().trim().is_empty() => {
                Err(DbiError::input("Query must not be empty"))
            },
            [query] => Ok(query.clone()),
            _ => Err(DbiError::input("Too many queries were given")),
        }
    }

    /// The identifier text
    pub fn identifier(&self) -> &str {
        match self {
            Query::RefSeq(id) | Query::UniProt(id) | Query::Symbol(id) => id,
        }
    }

    /// Human-readable kind of identifier
    pub fn kind(&self) -> &'static str {
        match self {
            Query::RefSeq(_) => "RefSeq ID",
            Query::UniProt(_) => "UniProt ID",
            Query::Symbol(_) => "symbol",
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Reusable classifier holding the compiled accession pattern
#[derive(Debug, Clone)]
pub struct QueryClassifier {
    uniprot_pattern: Regex,
}

impl QueryClassifier {
    pub fn new() -> Result<Self> {
        let uniprot_pattern = Regex::new(UNIPROT_ACCESSION_PATTERN)
            .map_err(|e| DbiError::Parse(format!("invalid accession pattern: {}", e)))?;
        Ok(Self { uniprot_pattern })
    }

    /// See [`Query::classify`]
    pub fn classify(&self, text: &str) -> Result<Query> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DbiError::input("No query entered"));
        }

        let query = if text.contains(REFSEQ_PROTEIN_MARKER) {
            Query::RefSeq(text.to_string())
        } else if self.uniprot_pattern.is_match(text) {
            Query::UniProt(text.to_string())
        } else {
            Query::Symbol(text.to_string())
        };

        debug!(query = %query, kind = query.kind(), "Classified query");
        Ok(query)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            Query::classify("NP_149988.1").unwrap(),
            Query::RefSeq("NP_149988.1".to_string())
        );
        assert_eq!(
            Query::classify("Q96GV9").unwrap(),
            Query::UniProt("Q96GV9".to_string())
        );
        assert_eq!(
            Query::classify("A0A024RBG1").unwrap(),
            Query::UniProt("A0A024RBG1".to_string())
        );
        assert_eq!(
            Query::classify("MACIR").unwrap(),
            Query::Symbol("MACIR".to_string())
        );
    }

    #[test]
    fn test_classify_trims_and_rejects_empty() {
        assert_eq!(
            Query::classify("  ACTB\n").unwrap(),
            Query::Symbol("ACTB".to_string())
        );
        assert!(matches!(Query::classify("   "), Err(DbiError::Input(_))));
    }

    #[test]
    fn test_lowercase_accession_is_a_symbol() {
        assert_eq!(
            Query::classify("q96gv9").unwrap(),
            Query::Symbol("q96gv9".to_string())
        );
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(
            Query::from_parts(None, Some("Q9NY95".to_string()), None).unwrap(),
            Query::UniProt("Q9NY95".to_string())
        );

        match Query::from_parts(None, None, None) {
            Err(DbiError::Input(msg)) => assert_eq!(msg, "No query entered"),
            other => panic!("expected Input, got {:?}", other),
        }
        match Query::from_parts(Some("NP_1".to_string()), None, Some("ONE".to_string())) {
            Err(DbiError::Input(msg)) => assert_eq!(msg, "Too many queries were given"),
            other => panic!("expected Input, got {:?}", other),
        }
        assert!(matches!(
            Query::from_parts(None, None, Some(String::new())),
            Err(DbiError::Input(_))
        ));
    }

    #[test]
    fn test_kind_and_display() {
        let query = Query::RefSeq("NP_000005.3".to_string());
        assert_eq!(query.kind(), "RefSeq ID");
        assert_eq!(query.to_string(), "NP_000005.3");
    }
}
