//! Dataset loading
//!
//! Turns uploaded spreadsheet bytes into [`PartDataset`](stockline_models::PartDataset)
//! rows and fingerprints the raw upload.

pub mod parser;

pub use parser::{ParsedTable, TableFormat, TableParser};

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the uploaded bytes. Re-uploading the same file
/// yields the same fingerprint regardless of the dataset id it is stored
/// under.
pub fn content_fingerprint(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable_and_content_addressed() {
        assert_eq!(
            content_fingerprint(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(content_fingerprint(b"hello"), content_fingerprint(b"hello"));
        assert_ne!(content_fingerprint(b"hello"), content_fingerprint(b"hello!"));
    }
}
