//! SHA256SUMS checksum manifest parsing
//!
//! Release manifests are plain text, one `<digest> <filename>` pair per line.
//! Digests are keyed case-insensitively; when the same digest appears twice
//! the later line wins.

use std::collections::HashMap;

use crate::error::SwapError;

/// Parsed checksum manifest, keyed by lowercased SHA-256 digest.
#[derive(Debug, Clone)]
pub struct Manifest {
    entries: HashMap<String, String>,
}

impl Manifest {
    /// Parse the body of a SHA256SUMS file.
    ///
    /// Blank lines are skipped. Fields are whitespace-separated; anything
    /// after the second field on a line is ignored. A non-blank line with
    /// fewer than two fields fails the whole parse.
    pub fn parse(text: &str) -> Result<Self, SwapError> {
        let mut entries = HashMap::new();

        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (Some(digest), Some(filename)) = (fields.next(), fields.next()) else {
                return Err(SwapError::ManifestUnparseable {
                    line: idx + 1,
                    text: line.to_string(),
                });
            };

            entries.insert(digest.to_lowercase(), filename.to_string());
        }

        Ok(Self { entries })
    }

    /// Look up the filename listed for a digest, case-insensitively.
    pub fn filename_for(&self, digest: &str) -> Option<&str> {
        self.entries.get(&digest.to_lowercase()).map(String::as_str)
    }

    /// Number of digest entries in the manifest.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
