//! Terraform version swapper
//!
//! tfswap keeps any number of terraform builds cached locally and swaps one
//! of them into an "active slot" on demand. A requested version that is not
//! cached yet is downloaded from the release server, checked against the
//! release's SHA256SUMS manifest (and optionally against a caller-pinned
//! digest), extracted, and promoted into the cache before activation. A
//! cached version is activated straight from disk without any network
//! traffic.
//!
//! # Example
//!
//! ```no_run
//! use tfswap::{Arch, CacheStore, Platform, Swapper, Target};
//!
//! fn main() -> Result<(), tfswap::SwapError> {
//!     let target = Target::new("1.5.0", Platform::Linux, Arch::Amd64);
//!     let swapper = Swapper::new(CacheStore::new(CacheStore::default_root()));
//!     swapper.acquire_and_activate(&target, false)?;
//!     Ok(())
//! }
//! ```
//!
//! # Cache layout
//!
//! ```text
//! ~/.tfswap/
//!   terraform            active slot (terraform.exe on windows)
//!   versions/            one verified build per version
//!   temp/                staging scratch, cleared after each download
//! ```
//!
//! # Environment
//!
//! - `TFSWAP_HOME` - cache root (default `~/.tfswap`)
//! - `TFSWAP_RELEASE_URL` - release server (default releases.hashicorp.com)
//! - `TFSWAP_HTTP_TIMEOUT` - manifest fetch timeout in seconds (5-300)

pub mod cache;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod manifest;
pub mod output;
pub mod swap;
pub mod target;
pub mod verify;

pub use cache::CacheStore;
pub use error::SwapError;
pub use manifest::Manifest;
pub use swap::{DEFAULT_BASE_URL, Outcome, Swapper};
pub use target::{Arch, Platform, Target};
