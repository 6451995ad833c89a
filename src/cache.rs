//! On-disk cache layout
//!
//! Everything lives under one root (default `~/.tfswap`):
//!
//! ```text
//! ~/.tfswap/
//!   terraform            active slot (terraform.exe on windows)
//!   versions/            immutable cache, one file per version
//!   temp/                staging scratch, recreated every run
//! ```
//!
//! A version is "cached" when its file exists under `versions/`. Activation
//! copies a cached build into the active slot; the cached copy is never
//! modified afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SwapError;
use crate::target::Target;

pub struct CacheStore {
    root: PathBuf,
    versions: PathBuf,
    temp: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let versions = root.join("versions");
        let temp = root.join("temp");
        Self {
            root,
            versions,
            temp,
        }
    }

    /// Default cache root: `$TFSWAP_HOME`, else `~/.tfswap`.
    pub fn default_root() -> PathBuf {
        if let Ok(path) = std::env::var("TFSWAP_HOME") {
            return PathBuf::from(path);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tfswap")
    }

    /// Create the root, versions, and temp directories. Idempotent.
    pub fn ensure_layout(&self) -> Result<(), SwapError> {
        fs::create_dir_all(&self.root)?;
        fs::create_dir_all(&self.versions)?;
        fs::create_dir_all(&self.temp)?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp
    }

    /// Where `target`'s build lives in the immutable cache.
    pub fn versioned_path(&self, target: &Target) -> PathBuf {
        self.versions.join(target.versioned_name())
    }

    /// The active slot for `target`'s platform.
    pub fn active_path(&self, target: &Target) -> PathBuf {
        self.root.join(target.executable_name())
    }

    /// Whether `target`'s build is already cached.
    pub fn has_version(&self, target: &Target) -> bool {
        self.versioned_path(target).is_file()
    }

    /// Move a verified executable from staging into the versions directory,
    /// replacing any previous build of the same version.
    pub fn promote(&self, extracted: &Path, target: &Target) -> Result<PathBuf, SwapError> {
        let dest = self.versioned_path(target);
        // rename over an existing file is not portable
        if dest.exists() {
            fs::remove_file(&dest)?;
        }
        fs::rename(extracted, &dest)?;
        Ok(dest)
    }

    /// Copy `target`'s cached build into the active slot, replacing whatever
    /// version was active before.
    pub fn activate(&self, target: &Target) -> Result<PathBuf, SwapError> {
        let versioned = self.versioned_path(target);
        let active = self.active_path(target);
        fs::copy(&versioned, &active)?;
        Ok(active)
    }

    /// Remove the staging directory and everything in it.
    pub fn clear_temp(&self) -> Result<(), SwapError> {
        if self.temp.exists() {
            fs::remove_dir_all(&self.temp)?;
        }
        Ok(())
    }
}
