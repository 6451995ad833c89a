//! Archive integrity verification
//!
//! A downloaded archive passes three checks, in order: its SHA-256 digest
//! must appear in the release manifest, the manifest must pair that digest
//! with the archive filename we asked for, and when the caller pinned a
//! digest the computed one must match it. All comparisons are
//! case-insensitive. The first failing check aborts the run; nothing
//! unverified reaches the cache.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::SwapError;
use crate::manifest::Manifest;
use crate::output;
use crate::target::Target;

/// Read granularity while hashing (1 MB)
const CHUNK_SIZE: usize = 1024 * 1024;

/// Compute the lowercase hex SHA-256 digest of a file.
pub fn file_sha256(path: &Path) -> Result<String, SwapError> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Run the full integrity check on a downloaded archive.
///
/// Returns the computed digest on success.
pub fn verify_archive(
    archive: &Path,
    target: &Target,
    manifest: &Manifest,
) -> Result<String, SwapError> {
    let computed = file_sha256(archive)?;
    output::detail(&format!("archive sha256 is {computed}"));

    let Some(listed) = manifest.filename_for(&computed) else {
        return Err(SwapError::HashNotFound { hash: computed });
    };
    output::detail(&format!("manifest pairs this hash with {listed}"));

    let expected = target.archive_file();
    if !listed.eq_ignore_ascii_case(&expected) {
        return Err(SwapError::FilenameInconsistency {
            expected,
            found: listed.to_string(),
        });
    }
    output::detail("hash and filename are consistent");

    if let Some(requested) = &target.expected_hash {
        if !computed.eq_ignore_ascii_case(requested) {
            return Err(SwapError::ExplicitHashMismatch {
                requested: requested.clone(),
                computed,
            });
        }
        output::detail("archive matches the requested hash");
    }

    Ok(computed)
}
