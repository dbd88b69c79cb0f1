//! Resolver, comparator and statistics over a small synthetic cache
//!
//! Nine UniProt entries and eleven RefSeq entries exercising symbol
//! disagreement, missing cross-references, one-to-many fan-out and
//! sequence/length (dis)agreement.

use dbi_common::config::CacheConfig;
use dbi_common::store::RecordStore;
use dbi_common::{RefSeqRecord, RefSeqRecords, Snapshot, UniProtRecord, UniProtRecords};
use dbi_query::{compare, resolve, summary_statistics, Category, Query, Resolver};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn refseq(symbols: &[&str], uniprot_id: Option<&str>, sequence: &str) -> RefSeqRecord {
    RefSeqRecord {
        symbols: strings(symbols),
        uniprot_id: uniprot_id.map(str::to_string),
        sequence: Some(sequence.to_string()),
    }
}

fn uniprot(symbols: &[&str], refseq_ids: &[&str], sequence: &str) -> UniProtRecord {
    UniProtRecord {
        symbols: strings(symbols),
        refseq_ids: strings(refseq_ids),
        sequence: Some(sequence.to_string()),
    }
}

fn synthetic_snapshot() -> Snapshot {
    let refseq: RefSeqRecords = [
        ("rsid1", refseq(&["ONE"], Some("upid1"), "ONEONEONE")),
        ("rsid2", refseq(&["TWO"], Some("upid2"), "TWOTWOTWO")),
        ("rsid3", refseq(&["THREE"], Some("upid3"), "THREETHREE")),
        ("rsid4", refseq(&["FOUR"], Some("upid4"), "FOURFOUR")),
        ("rsid5", refseq(&[], None, "FIVEFIVE")),
        ("rsid6", refseq(&["SIX"], None, "SIXSIX")),
        ("rsid7", refseq(&[], None, "")),
        ("rsid8", refseq(&["EIGHT", "ACHT"], None, "")),
        ("rsid9", refseq(&["NEUN"], Some("upid9"), "NEUNNEUN")),
        ("rsid10", refseq(&["NEUF"], Some("upid9"), "NUEVENUEVE")),
        ("rsid11", refseq(&["NUEVE"], Some("upid9"), "NINENINE")),
    ]
    .into_iter()
    .map(|(acc, record)| (acc.to_string(), record))
    .collect();

    let uniprot: UniProtRecords = [
        ("upid1", uniprot(&["ONE"], &["rsid1"], "ONEONEONE")),
        ("upid2", uniprot(&["ZWEI"], &["rsid2"], "ZWEIZWEIZWEI")),
        ("upid3", uniprot(&["THREE"], &[], "THREETHREE")),
        ("upid4", uniprot(&["FOUR", "CUATRO"], &["rsid4", "rsid5"], "CUATRO44")),
        ("upid5", uniprot(&[], &[], "")),
        ("upid6", uniprot(&["SIX"], &[], "SIXSIX")),
        ("upid7", uniprot(&["EIGHT"], &[], "")),
        ("upid8", uniprot(&["EIGHT", "OCHO"], &[], "")),
        ("upid9", uniprot(&["NUEVE"], &["rsid9", "rsid10", "rsid11"], "NUEVENUEVE")),
    ]
    .into_iter()
    .map(|(acc, record)| (acc.to_string(), record))
    .collect();

    Snapshot::new(refseq, uniprot)
}

fn accessions<R>(hits: &[dbi_common::Hit<R>]) -> Vec<&str> {
    hits.iter().map(|h| h.accession.as_str()).collect()
}

#[test]
fn test_summary_statistics_counts() {
    let table = summary_statistics(&synthetic_snapshot());

    let counts: Vec<usize> = Category::ALL
        .iter()
        .map(|c| table.row(*c).unwrap().matches)
        .collect();
    assert_eq!(counts, vec![4, 7, 7, 3, 5]);
    assert_eq!(table.uniprot_entries, 9);
    assert_eq!(table.refseq_entries, 11);
}

#[test]
fn test_summary_statistics_percentages() {
    let table = summary_statistics(&synthetic_snapshot());

    let uniprot: Vec<String> = table.rows.iter().map(|r| r.uniprot_percent()).collect();
    let refseq: Vec<String> = table.rows.iter().map(|r| r.refseq_percent()).collect();

    assert_eq!(uniprot, vec!["44.44%", "44.44%", "55.56%", "33.33%", "44.44%"]);
    assert_eq!(refseq, vec!["36.36%", "63.64%", "63.64%", "27.27%", "45.45%"]);
}

#[test]
fn test_resolve_uniprot_with_uncross_referenced_refseq() {
    let result = resolve(&synthetic_snapshot(), &Query::UniProt("upid4".into()));
    assert_eq!(accessions(&result.uniprot), vec!["upid4"]);
    assert_eq!(accessions(&result.refseq), vec!["rsid4", "rsid5"]);
}

#[test]
fn test_resolve_symbol_matches_each_database_independently() {
    let snapshot = synthetic_snapshot();

    let eight = resolve(&snapshot, &Query::Symbol("EIGHT".into()));
    assert_eq!(accessions(&eight.uniprot), vec!["upid7", "upid8"]);
    assert_eq!(accessions(&eight.refseq), vec!["rsid8"]);

    let two = resolve(&snapshot, &Query::Symbol("TWO".into()));
    assert!(two.uniprot.is_empty());
    assert_eq!(accessions(&two.refseq), vec!["rsid2"]);
}

#[test]
fn test_resolve_every_cross_reference() {
    let snapshot = synthetic_snapshot();
    for (acc, record) in &snapshot.refseq {
        let Some(up) = record.uniprot_id.as_deref() else {
            continue;
        };
        if !snapshot.uniprot.contains_key(up) {
            continue;
        }
        let result = resolve(&snapshot, &Query::RefSeq(acc.clone()));
        assert_eq!(accessions(&result.uniprot), vec![up], "{}", acc);
    }
}

#[test]
fn test_compare_fan_out_without_sequence_matches() {
    let table = compare(&synthetic_snapshot(), &Query::UniProt("upid4".into())).unwrap();

    assert_eq!(
        table.header(),
        vec!["", "UniProt entry 1", "RefSeq entry 1", "RefSeq entry 2"]
    );
    assert!(table.columns.iter().all(|c| c.sequence_matches.is_empty()));
}

#[test]
fn test_compare_symbol_with_single_database() {
    let table = compare(&synthetic_snapshot(), &Query::Symbol("TWO".into())).unwrap();
    assert_eq!(table.header(), vec!["", "No UniProt entry", "RefSeq entry 1"]);
}

#[test]
fn test_comparison_json_shape() {
    let table = compare(&synthetic_snapshot(), &Query::Symbol("TWO".into())).unwrap();
    let value = serde_json::to_value(&table).unwrap();

    assert_eq!(value["query"], serde_json::json!({"kind": "symbol", "id": "TWO"}));

    let placeholder = &value["columns"][0];
    assert_eq!(placeholder["label"], "No UniProt entry");
    assert_eq!(placeholder["symbol"], serde_json::json!([]));
    assert!(placeholder["sequence"].is_null());
    assert!(placeholder["sequence length"].is_null());

    let rsid2 = &value["columns"][1];
    assert_eq!(rsid2["UniProt ID"], serde_json::json!(["upid2"]));
    assert_eq!(rsid2["RefSeq ID"], serde_json::json!(["rsid2"]));
    assert_eq!(rsid2["sequence"], "TWOTWOTWO");
    assert_eq!(rsid2["sequence length"], 9);
}

#[test]
fn test_summary_json_shape() {
    let value = serde_json::to_value(summary_statistics(&synthetic_snapshot())).unwrap();

    assert_eq!(value["uniprot_entries"], 9);
    assert_eq!(value["refseq_entries"], 11);
    assert_eq!(value["rows"][0]["category"], "Symbol");
    assert_eq!(value["rows"][0]["matches"], 4);
    assert_eq!(value["rows"][4]["category"], "SequenceLength");
}

#[test]
fn test_compare_three_way_sequence_match() {
    let mut snapshot = synthetic_snapshot();
    snapshot
        .refseq
        .get_mut("rsid9")
        .unwrap()
        .sequence = Some("NUEVENUEVE".to_string());

    let table = compare(&snapshot, &Query::UniProt("upid9".into())).unwrap();

    let matches = |label: &str| table.column(label).unwrap().sequence_matches.clone();
    assert_eq!(matches("UniProt entry 1"), vec!["RefSeq entry 1", "RefSeq entry 2"]);
    assert_eq!(matches("RefSeq entry 1"), vec!["UniProt entry 1", "RefSeq entry 2"]);
    assert_eq!(matches("RefSeq entry 2"), vec!["UniProt entry 1", "RefSeq entry 1"]);
    assert!(matches("RefSeq entry 3").is_empty());
}

#[test]
fn test_resolver_over_persisted_store() {
    let tmp = tempfile::tempdir().unwrap();
    let store = RecordStore::new(CacheConfig::new(tmp.path()));
    let snapshot = synthetic_snapshot();
    store.save_refseq(&snapshot.refseq).unwrap();
    store.save_uniprot(&snapshot.uniprot).unwrap();

    let resolver = Resolver::new(store);

    let summary = resolver.summary_statistics().unwrap();
    assert_eq!(summary, summary_statistics(&snapshot));

    let err = resolver
        .compare_entries(&Query::Symbol("NOTaSYMBOL".into()))
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(resolver
        .resolve(&Query::Symbol("NOTaSYMBOL".into()))
        .unwrap()
        .is_empty());
}
