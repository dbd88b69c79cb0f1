//! Persisted accession-to-record mappings
//!
//! Each mapping is one JSON object keyed by accession. Keys are written in
//! sorted order so assembling unchanged inputs twice yields identical bytes.
//! Writes land in a temporary sibling file that is renamed over the target,
//! so a concurrent reader sees either the previous snapshot or the new one.

use crate::checksum::checksum_bytes;
use crate::config::CacheConfig;
use crate::error::{DbiError, Result};
use crate::types::{RefSeqRecords, Snapshot, UniProtRecords};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Reads and writes the `refseq` and `uniprot` mappings under a cache root
#[derive(Debug, Clone)]
pub struct RecordStore {
    config: CacheConfig,
}

impl RecordStore {
    pub fn new(config: CacheConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Load the RefSeq mapping
    pub fn load_refseq(&self) -> Result<RefSeqRecords> {
        read_mapping(&self.config.refseq_snapshot_path())
    }

    /// Load the UniProt mapping
    pub fn load_uniprot(&self) -> Result<UniProtRecords> {
        read_mapping(&self.config.uniprot_snapshot_path())
    }

    /// Load both mappings
    pub fn load(&self) -> Result<Snapshot> {
        Ok(Snapshot::new(self.load_refseq()?, self.load_uniprot()?))
    }

    /// Persist the RefSeq mapping, returning the SHA-256 of the written document
    pub fn save_refseq(&self, records: &RefSeqRecords) -> Result<String> {
        write_mapping(&self.config.refseq_snapshot_path(), records)
    }

    /// Persist the UniProt mapping, returning the SHA-256 of the written document
    pub fn save_uniprot(&self, records: &UniProtRecords) -> Result<String> {
        write_mapping(&self.config.uniprot_snapshot_path(), records)
    }

    /// Whether both mappings have been persisted
    pub fn is_populated(&self) -> bool {
        self.config.refseq_snapshot_path().is_file()
            && self.config.uniprot_snapshot_path().is_file()
    }
}

fn read_mapping<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.is_file() {
        return Err(DbiError::file_missing(path));
    }
    let data = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = data.len(), "Loading persisted mapping");
    Ok(serde_json::from_slice(&data)?)
}

fn write_mapping<T: Serialize>(path: &Path, mapping: &T) -> Result<String> {
    let data = serde_json::to_vec(mapping)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, &data)?;
    std::fs::rename(&tmp_path, path)?;

    let checksum = checksum_bytes(&data);
    debug!(path = %path.display(), bytes = data.len(), checksum = %checksum, "Persisted mapping");
    Ok(checksum)
}
