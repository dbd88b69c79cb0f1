//! Cache configuration
//!
//! Every component receives the cache root explicitly; nothing reads a
//! process-wide directory. The layout under the root is fixed:
//!
//! ```text
//! <root>/
//! ├── data/                 raw downloads
//! │   └── refseq_fasta/     compressed RefSeq protein FASTA files
//! ├── refseq/refseq.json    persisted RefSeq mapping
//! ├── uniprot/uniprot.json  persisted UniProt mapping
//! └── logs/
//! ```

use crate::error::{DbiError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Cache Layout Constants
// ============================================================================

/// Name of the cache directory created in the user's home directory.
pub const DEFAULT_CACHE_DIR_NAME: &str = ".dbinspector";

/// Environment variable overriding the cache root.
pub const CACHE_DIR_ENV: &str = "DBI_CACHE_DIR";

/// Annotated-sequence document (UniProt XML).
pub const UNIPROT_XML_FILE: &str = "uniprot_sprot_human.xml.gz";

/// RefSeq to UniProt collaboration table.
pub const COLLAB_TABLE_FILE: &str = "gene_refseq_uniprotkb_collab.gz";

/// Gene table with `Symbol` and `Protein` columns.
pub const GENE_TABLE_FILE: &str = "LRG_RefSeqGene";

/// Persisted RefSeq mapping file name.
pub const REFSEQ_SNAPSHOT_FILE: &str = "refseq.json";

/// Persisted UniProt mapping file name.
pub const UNIPROT_SNAPSHOT_FILE: &str = "uniprot.json";

/// Cache root configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache root directory
    pub root: PathBuf,
}

impl CacheConfig {
    /// Use `root` as the cache root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `~/.dbinspector`
    pub fn default_root() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_CACHE_DIR_NAME))
            .ok_or_else(|| DbiError::config("Could not determine home directory"))
    }

    /// Load config from environment variables
    ///
    /// `DBI_CACHE_DIR` takes precedence over the home-directory default.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CACHE_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => Ok(Self::new(dir)),
            _ => Ok(Self::new(Self::default_root()?)),
        }
    }

    /// Create every directory of the layout
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [
            self.root.clone(),
            self.data_dir(),
            self.refseq_fasta_dir(),
            self.refseq_dir(),
            self.uniprot_dir(),
            self.logs_dir(),
        ] {
            std::fs::create_dir_all(&dir)?;
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn refseq_fasta_dir(&self) -> PathBuf {
        self.data_dir().join("refseq_fasta")
    }

    pub fn refseq_dir(&self) -> PathBuf {
        self.root.join("refseq")
    }

    pub fn uniprot_dir(&self) -> PathBuf {
        self.root.join("uniprot")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    pub fn uniprot_xml_path(&self) -> PathBuf {
        self.data_dir().join(UNIPROT_XML_FILE)
    }

    pub fn collab_table_path(&self) -> PathBuf {
        self.data_dir().join(COLLAB_TABLE_FILE)
    }

    pub fn gene_table_path(&self) -> PathBuf {
        self.data_dir().join(GENE_TABLE_FILE)
    }

    pub fn refseq_snapshot_path(&self) -> PathBuf {
        self.refseq_dir().join(REFSEQ_SNAPSHOT_FILE)
    }

    pub fn uniprot_snapshot_path(&self) -> PathBuf {
        self.uniprot_dir().join(UNIPROT_SNAPSHOT_FILE)
    }
}
