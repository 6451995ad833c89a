//! Release target descriptor
//!
//! A [`Target`] names one terraform build: version, platform, and CPU
//! architecture, plus an optional caller-pinned SHA-256 digest. All archive
//! and manifest names are derived from it, so the rest of the pipeline never
//! does its own string assembly.

use std::fmt;

use crate::error::SwapError;

/// Operating systems hashicorp publishes terraform builds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    Darwin,
    Openbsd,
}

impl Platform {
    /// Map a host OS name as reported by `std::env::consts::OS`.
    ///
    /// FreeBSD hosts run the openbsd build.
    pub fn from_host(os: &str) -> Result<Self, SwapError> {
        match os {
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "macos" => Ok(Self::Darwin),
            "freebsd" | "openbsd" => Ok(Self::Openbsd),
            other => Err(SwapError::UnsupportedPlatform {
                kind: "operating system",
                value: other.to_string(),
            }),
        }
    }

    /// The platform segment used in release filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Openbsd => "openbsd",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU architectures hashicorp publishes terraform builds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Amd64,
    X86,
    Arm,
    Arm64,
}

impl Arch {
    /// Map a host architecture as reported by `std::env::consts::ARCH`.
    pub fn from_host(arch: &str) -> Result<Self, SwapError> {
        match arch {
            "x86_64" => Ok(Self::Amd64),
            "x86" => Ok(Self::X86),
            "arm" => Ok(Self::Arm),
            "aarch64" => Ok(Self::Arm64),
            other => Err(SwapError::UnsupportedPlatform {
                kind: "cpu architecture",
                value: other.to_string(),
            }),
        }
    }

    /// The architecture segment used in release filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amd64 => "amd64",
            Self::X86 => "386",
            Self::Arm => "arm",
            Self::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One specific terraform build to acquire and activate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub version: String,
    pub platform: Platform,
    pub arch: Arch,
    /// Caller-pinned digest the archive must additionally match, if set.
    pub expected_hash: Option<String>,
}

impl Target {
    pub fn new(version: impl Into<String>, platform: Platform, arch: Arch) -> Self {
        Self {
            version: version.into(),
            platform,
            arch,
            expected_hash: None,
        }
    }

    /// Pin the archive to a specific SHA-256 digest (compared case-insensitively).
    pub fn with_expected_hash(mut self, hash: impl Into<String>) -> Self {
        self.expected_hash = Some(hash.into());
        self
    }

    /// Release archive filename, e.g. `terraform_1.5.0_linux_amd64.zip`.
    pub fn archive_file(&self) -> String {
        format!(
            "terraform_{}_{}_{}.zip",
            self.version, self.platform, self.arch
        )
    }

    /// Checksum manifest filename, e.g. `terraform_1.5.0_SHA256SUMS`.
    pub fn sums_file(&self) -> String {
        format!("terraform_{}_SHA256SUMS", self.version)
    }

    /// Full URL of the release archive under `base`.
    pub fn archive_url(&self, base: &str) -> String {
        format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            self.version,
            self.archive_file()
        )
    }

    /// Full URL of the checksum manifest under `base`.
    pub fn sums_url(&self, base: &str) -> String {
        format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            self.version,
            self.sums_file()
        )
    }

    /// Name of the executable inside the archive (and of the active slot).
    pub fn executable_name(&self) -> &'static str {
        match self.platform {
            Platform::Windows => "terraform.exe",
            _ => "terraform",
        }
    }

    /// Name the build is cached under, e.g. `terraform_1.5.0`.
    ///
    /// No `.exe` suffix on any platform; the suffix only appears when the
    /// build is copied into the active slot.
    pub fn versioned_name(&self) -> String {
        format!("terraform_{}", self.version)
    }
}
