//! Acquire-and-activate pipeline
//!
//! One call does the whole job: check the cache, otherwise download the
//! archive and its checksum manifest, verify, extract, promote the build
//! into the immutable cache, and copy it into the active slot. Cached
//! versions were verified when they were promoted, so a cache hit skips
//! straight to activation.

use tempfile::NamedTempFile;

use crate::cache::CacheStore;
use crate::error::SwapError;
use crate::extract;
use crate::fetch::Fetcher;
use crate::manifest::Manifest;
use crate::output;
use crate::target::Target;
use crate::verify;

/// Default release server consulted for archives and checksum manifests.
pub const DEFAULT_BASE_URL: &str = "https://releases.hashicorp.com/terraform";

/// How a successful run obtained the requested version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The version was already cached; only the active slot changed.
    CacheHit,
    /// The archive was downloaded, verified, and promoted before activation.
    Downloaded,
}

pub struct Swapper {
    fetcher: Fetcher,
    store: CacheStore,
    base_url: String,
}

impl Swapper {
    pub fn new(store: CacheStore) -> Self {
        let base_url =
            std::env::var("TFSWAP_RELEASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            fetcher: Fetcher::new(),
            store,
            base_url,
        }
    }

    /// Point the pipeline at a different release server.
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = base.into();
        self
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Make `target`'s version the active terraform, downloading it first if
    /// it is not already cached (or when `force` is set).
    pub fn acquire_and_activate(
        &self,
        target: &Target,
        force: bool,
    ) -> Result<Outcome, SwapError> {
        self.store.ensure_layout()?;

        if self.store.has_version(target) {
            if !force {
                output::info(&format!(
                    "version {} already on disk, swapping from cache",
                    target.version
                ));
                self.store.activate(target)?;
                output::success(&format!("terraform {} active", target.version));
                return Ok(Outcome::CacheHit);
            }
            output::info(&format!(
                "version {} is cached but a refresh was forced",
                target.version
            ));
        }

        output::action(&format!("downloading terraform {}", target.version));
        let archive_url = target.archive_url(&self.base_url);
        output::debug(&format!("fetching {archive_url}"));

        let archive = NamedTempFile::new_in(self.store.temp_dir())?;
        let Some(bytes) = self
            .fetcher
            .fetch_to_file(&archive_url, archive.path(), &target.archive_file())?
        else {
            return Err(SwapError::TransportFailure {
                url: archive_url,
                reason: "no archive for this version".to_string(),
            });
        };
        output::detail(&format!(
            "downloaded {} ({} bytes)",
            target.archive_file(),
            bytes
        ));

        let sums_url = target.sums_url(&self.base_url);
        output::debug(&format!("fetching {sums_url}"));
        let Some(sums_text) = self.fetcher.fetch_text(&sums_url)? else {
            return Err(SwapError::TransportFailure {
                url: sums_url,
                reason: "no checksum manifest for this version".to_string(),
            });
        };

        let manifest = Manifest::parse(&sums_text)?;
        output::debug(&format!("manifest lists {} archives", manifest.len()));

        verify::verify_archive(archive.path(), target, &manifest)?;

        extract::extract_zip(archive.path(), self.store.temp_dir())?;
        let extracted = self.store.temp_dir().join(target.executable_name());
        if !extracted.is_file() {
            return Err(SwapError::ExtractionFailure(format!(
                "archive has no {} entry",
                target.executable_name()
            )));
        }

        self.store.promote(&extracted, target)?;
        self.store.activate(target)?;

        // Close the download handle before the staging dir goes away
        drop(archive);
        self.store.clear_temp()?;

        output::success(&format!("terraform {} active", target.version));
        Ok(Outcome::Downloaded)
    }
}
