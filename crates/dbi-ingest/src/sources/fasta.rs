//! RefSeq protein FASTA archive
//!
//! A directory of gzip-compressed multi-record FASTA files as published by
//! NCBI (`human.N.protein.faa.gz`). Headers look like:
//!
//! ```text
//! >NP_149988.1 macrophage immunometabolism regulator [Homo sapiens]
//! ```

use dbi_common::Result;
use flate2::read::GzDecoder;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::is_protein_accession;

/// RefSeq accession -> amino-acid sequence
pub type RefSeqSequences = BTreeMap<String, String>;

/// Species annotation appended to every human RefSeq header
const SPECIES_SUFFIX: &str = " [Homo sapiens]";

/// Parse every compressed FASTA file in `dir`
///
/// Files are read in name order. Within a file a repeated accession keeps
/// its last record; across files the first file to define an accession wins.
pub fn parse_sequence_archive(dir: &Path) -> Result<RefSeqSequences> {
    let mut sequences = RefSeqSequences::new();

    for path in archive_files(dir)? {
        let file = File::open(&path)?;
        let parsed = parse_reader(BufReader::new(GzDecoder::new(file)))?;
        debug!(path = %path.display(), records = parsed.len(), "Parsed FASTA file");

        for (accession, sequence) in parsed {
            sequences.entry(accession).or_insert(sequence);
        }
    }

    Ok(sequences)
}

/// Compressed FASTA files in `dir`, sorted by name
fn archive_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(dbi_common::DbiError::file_missing(dir));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_gz = entry.file_name().to_string_lossy().contains(".gz");
        if is_gz && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse uncompressed multi-record FASTA text
pub fn parse_reader<R: BufRead>(reader: R) -> Result<RefSeqSequences> {
    let mut sequences = RefSeqSequences::new();
    let mut current: Option<(String, String)> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();

        if let Some(header) = line.strip_prefix('>') {
            flush(&mut sequences, current.take());
            current = header_accession(header).map(|acc| (acc, String::new()));
        } else if let Some((_, sequence)) = current.as_mut() {
            sequence.push_str(line);
        }
    }
    flush(&mut sequences, current);

    Ok(sequences)
}

fn flush(sequences: &mut RefSeqSequences, record: Option<(String, String)>) {
    if let Some((accession, sequence)) = record {
        sequences.insert(accession, sequence);
    }
}

/// Accession of a header line, if it is a protein accession
fn header_accession(header: &str) -> Option<String> {
    let header = header.replace(SPECIES_SUFFIX, "");
    header
        .split_whitespace()
        .next()
        .filter(|acc| is_protein_accession(acc))
        .map(str::to_string)
}
