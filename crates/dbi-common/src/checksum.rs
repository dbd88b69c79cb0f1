//! Checksum utilities for persisted snapshots

use sha2::{Digest, Sha256};

/// SHA-256 of an in-memory document, hex encoded
pub fn checksum_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
