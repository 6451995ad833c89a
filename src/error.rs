//! Pipeline error types.

use thiserror::Error;

/// Errors that can occur while acquiring and activating a terraform build.
///
/// Every variant is terminal for the current run; nothing is retried and no
/// partially verified archive is ever promoted into the cache.
#[derive(Error, Debug)]
pub enum SwapError {
    #[error("unsupported {kind}: {value}")]
    UnsupportedPlatform { kind: &'static str, value: String },

    #[error("could not fetch {url}: {reason}")]
    TransportFailure { url: String, reason: String },

    #[error("malformed checksum manifest at line {line}: {text:?}")]
    ManifestUnparseable { line: usize, text: String },

    #[error("archive hash {hash} does not appear in the checksum manifest")]
    HashNotFound { hash: String },

    #[error("manifest pairs the archive hash with {found}, expected {expected}")]
    FilenameInconsistency { expected: String, found: String },

    #[error("archive hash mismatch: requested {requested}, got {computed}")]
    ExplicitHashMismatch { requested: String, computed: String },

    #[error("could not extract archive: {0}")]
    ExtractionFailure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
