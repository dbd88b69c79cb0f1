//! Readers for the raw source formats
//!
//! Each reader produces a transient partial mapping keyed by accession. The
//! assembler merges them into the persisted records.

pub mod collab;
pub mod fasta;
pub mod gene_table;
pub mod uniprot;

pub use collab::parse_collab_table;
pub use fasta::parse_sequence_archive;
pub use gene_table::parse_gene_table;
pub use uniprot::{parse_uniprot_document, UniProtXmlParser};

use dbi_common::{DbiError, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Open a source file for buffered reading
///
/// Files with a `.gz` extension are decompressed on the fly.
pub(crate) fn open_source(path: &Path) -> Result<Box<dyn BufRead>> {
    if !path.is_file() {
        return Err(DbiError::file_missing(path));
    }
    let file = File::open(path)?;

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// RefSeq protein accessions (curated, `NP_` prefix)
pub(crate) fn is_protein_accession(accession: &str) -> bool {
    accession.starts_with("NP_")
}

#[cfg(test)]
pub(crate) mod test_support {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use std::path::Path;

    /// Write `content` gzip-compressed to `path`
    #[allow(clippy::unwrap_used)]
    pub fn write_gz(path: &Path, content: &str) {
        let file = std::fs::File::create(path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap();
    }
}
