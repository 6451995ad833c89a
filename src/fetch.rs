//! HTTP access to the release server
//!
//! Absent content (any non-success status) is modelled as `Ok(None)`; only
//! transport-level failures such as DNS errors, refused connections, and
//! timeouts become errors. The caller decides whether absence is fatal.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

use crate::error::SwapError;
use crate::output;

/// Timeout in seconds when `TFSWAP_HTTP_TIMEOUT` is unset
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Timeout for manifest requests, taken from `TFSWAP_HTTP_TIMEOUT` when set.
/// Resolved once per process.
fn http_timeout() -> Duration {
    static TIMEOUT: OnceLock<Duration> = OnceLock::new();
    *TIMEOUT.get_or_init(|| {
        let secs = std::env::var("TFSWAP_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
        // Accepted range is 5-300 seconds
        Duration::from_secs(secs.clamp(5, 300))
    })
}

/// Blocking HTTP client for release archives and checksum manifests.
pub struct Fetcher {
    timeout: Duration,
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            timeout: http_timeout(),
        }
    }

    /// GET a URL, distinguishing absent content from transport failure.
    fn get(&self, url: &str, timeout: Duration) -> Result<Option<ureq::Response>, SwapError> {
        match ureq::get(url).timeout(timeout).call() {
            Ok(response) => Ok(Some(response)),
            Err(ureq::Error::Status(code, _)) => {
                output::warning(&format!("failed to fetch {url} (HTTP {code})"));
                Ok(None)
            }
            Err(err) => Err(SwapError::TransportFailure {
                url: url.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    /// Fetch a small text document such as a checksum manifest.
    pub fn fetch_text(&self, url: &str) -> Result<Option<String>, SwapError> {
        let Some(response) = self.get(url, self.timeout)? else {
            return Ok(None);
        };

        let text = response
            .into_string()
            .map_err(|e| SwapError::TransportFailure {
                url: url.to_string(),
                reason: format!("failed to read response: {e}"),
            })?;

        Ok(Some(text))
    }

    /// Stream a response body to `dest` with a progress bar.
    ///
    /// `label` is the name shown next to the progress bar. Returns the number
    /// of bytes written, or `None` when the server has no such file.
    pub fn fetch_to_file(
        &self,
        url: &str,
        dest: &Path,
        label: &str,
    ) -> Result<Option<u64>, SwapError> {
        // 5 minute timeout for downloads
        let Some(response) = self.get(url, Duration::from_secs(300))? else {
            return Ok(None);
        };

        let pb = output::download_progress(&format!("downloading {label}"));

        if let Some(len) = response
            .header("content-length")
            .and_then(|s| s.parse().ok())
        {
            output::upgrade_to_bytes(&pb, len);
        }

        let mut reader = response.into_reader();
        let mut file = File::create(dest)?;
        let mut buffer = [0u8; 8192];
        let mut total_bytes = 0u64;

        loop {
            let bytes_read = reader
                .read(&mut buffer)
                .map_err(|e| SwapError::TransportFailure {
                    url: url.to_string(),
                    reason: format!("read error: {e}"),
                })?;

            if bytes_read == 0 {
                break;
            }

            file.write_all(&buffer[..bytes_read])?;
            total_bytes += bytes_read as u64;
            pb.set_position(total_bytes);
        }

        pb.finish_and_clear();
        Ok(Some(total_bytes))
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
