//! Release archive extraction
//!
//! Terraform ships as a zip with a single executable inside. Extraction is
//! native (the zip crate), skips entries whose names would escape the
//! destination, and preserves unix permission bits so the binary stays
//! executable.

use std::fs::File;
use std::path::Path;

use crate::error::SwapError;

/// Extract a zip archive into `dest`.
pub fn extract_zip(archive: &Path, dest: &Path) -> Result<(), SwapError> {
    let file = File::open(archive)?;

    let mut zip = zip::ZipArchive::new(file)
        .map_err(|e| SwapError::ExtractionFailure(format!("zip read error: {e}")))?;

    for i in 0..zip.len() {
        let mut entry = zip
            .by_index(i)
            .map_err(|e| SwapError::ExtractionFailure(format!("zip entry error: {e}")))?;

        // Skip entries with unsafe paths
        let Some(path) = entry.enclosed_name() else {
            continue;
        };
        let outpath = dest.join(path);

        if entry.is_dir() {
            std::fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let mut outfile = File::create(&outpath)?;
            std::io::copy(&mut entry, &mut outfile).map_err(|e| {
                SwapError::ExtractionFailure(format!(
                    "write error for {}: {e}",
                    outpath.display()
                ))
            })?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = entry.unix_mode() {
                    std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode)).ok();
                }
            }
        }
    }

    Ok(())
}
