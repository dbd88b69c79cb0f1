//! Cross-database lookup
//!
//! Resolving a query never fails for lack of matches: a database with no
//! matching record contributes an empty list. Escalating "found nowhere" to
//! an error is the comparator's job.

use crate::query::Query;
use dbi_common::config::CacheConfig;
use dbi_common::store::RecordStore;
use dbi_common::{Hit, RefSeqRecord, Result, Snapshot, UniProtRecord};
use serde::Serialize;
use tracing::debug;

/// Every record matching one query, per database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    #[serde(rename = "RefSeq")]
    pub refseq: Vec<Hit<RefSeqRecord>>,
    #[serde(rename = "UniProt")]
    pub uniprot: Vec<Hit<UniProtRecord>>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.refseq.is_empty() && self.uniprot.is_empty()
    }
}

/// Resolve `query` against an in-memory snapshot
pub fn resolve(snapshot: &Snapshot, query: &Query) -> Resolution {
    match query {
        Query::RefSeq(id) => by_refseq_id(snapshot, id),
        Query::UniProt(id) => by_uniprot_id(snapshot, id),
        Query::Symbol(symbol) => by_symbol(snapshot, symbol),
    }
}

/// The RefSeq record plus the UniProt record it points at, if any
fn by_refseq_id(snapshot: &Snapshot, id: &str) -> Resolution {
    let Some(record) = snapshot.refseq.get(id) else {
        return Resolution::default();
    };

    let uniprot = record
        .uniprot_id
        .as_deref()
        .and_then(|up| snapshot.uniprot.get_key_value(up))
        .map(|(acc, up)| Hit::new(acc.as_str(), up))
        .into_iter()
        .collect();

    Resolution {
        refseq: vec![Hit::new(id, record)],
        uniprot,
    }
}

/// The UniProt record plus every RefSeq record it references
fn by_uniprot_id(snapshot: &Snapshot, id: &str) -> Resolution {
    let Some(record) = snapshot.uniprot.get(id) else {
        return Resolution::default();
    };

    let mut refseq = Vec::with_capacity(record.refseq_ids.len());
    for refseq_id in &record.refseq_ids {
        match snapshot.refseq.get(refseq_id) {
            Some(hit) => refseq.push(Hit::new(refseq_id.as_str(), hit)),
            None => debug!(uniprot_id = id, refseq_id = %refseq_id, "Cross-reference not in RefSeq mapping"),
        }
    }

    Resolution {
        refseq,
        uniprot: vec![Hit::new(id, record)],
    }
}

/// Independent exact-match scans of both mappings
///
/// The upper-cased symbol is tried as well, since gene symbols are upper
/// case in one database but not always in the query.
fn by_symbol(snapshot: &Snapshot, symbol: &str) -> Resolution {
    let upper = symbol.to_uppercase();
    let has_symbol = |symbols: &[String]| symbols.iter().any(|s| *s == symbol || *s == upper);

    Resolution {
        refseq: snapshot
            .refseq
            .iter()
            .filter(|(_, record)| has_symbol(&record.symbols))
            .map(|(acc, record)| Hit::new(acc.as_str(), record))
            .collect(),
        uniprot: snapshot
            .uniprot
            .iter()
            .filter(|(_, record)| has_symbol(&record.symbols))
            .map(|(acc, record)| Hit::new(acc.as_str(), record))
            .collect(),
    }
}

/// Query operations backed by the persisted store
///
/// Each call loads a fresh snapshot, so a parse pass that completes between
/// two calls is visible to the second one.
#[derive(Debug, Clone)]
pub struct Resolver {
    store: RecordStore,
}

impl Resolver {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn from_config(config: CacheConfig) -> Self {
        Self::new(RecordStore::new(config))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub(crate) fn snapshot(&self) -> Result<Snapshot> {
        self.store.load()
    }

    /// Resolve `query` against the current persisted mappings
    pub fn resolve(&self, query: &Query) -> Result<Resolution> {
        let snapshot = self.snapshot()?;
        let resolution = resolve(&snapshot, query);
        debug!(
            query = %query,
            refseq = resolution.refseq.len(),
            uniprot = resolution.uniprot.len(),
            "Resolved query"
        );
        Ok(resolution)
    }
}
