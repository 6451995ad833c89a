//! tfswap CLI - swap the active terraform version
//!
//! Usage:
//!   tfswap 1.5.0                 Download (if needed) and activate 1.5.0
//!   tfswap 1.5.0 --force         Re-download even when the version is cached
//!   tfswap 1.5.0 --hash <hex>    Require the archive to match a digest

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tfswap::{Arch, CacheStore, Platform, Swapper, Target, output};

#[derive(Parser)]
#[command(name = "tfswap")]
#[command(about = "Download, verify, cache, and activate terraform versions")]
#[command(version)]
struct Cli {
    /// Terraform version to activate, e.g. 1.5.0
    #[arg(id = "VERSION")]
    version: String,

    /// Fetch from the release server even when the version is cached
    #[arg(short, long)]
    force: bool,

    /// SHA-256 digest the downloaded archive must match (hex, any case)
    #[arg(long, value_name = "HEX")]
    hash: Option<String>,

    /// Cache root directory
    #[arg(long, value_name = "DIR", env = "TFSWAP_HOME")]
    home: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    output::set_verbose(cli.verbose);

    let platform = Platform::from_host(std::env::consts::OS)?;
    let arch = Arch::from_host(std::env::consts::ARCH)?;
    output::debug(&format!("host resolved to {platform}/{arch}"));

    let mut target = Target::new(cli.version, platform, arch);
    if let Some(hash) = cli.hash {
        target = target.with_expected_hash(hash);
    }

    let root = cli.home.unwrap_or_else(CacheStore::default_root);
    let swapper = Swapper::new(CacheStore::new(root));
    swapper
        .acquire_and_activate(&target, cli.force)
        .with_context(|| format!("could not activate terraform {}", target.version))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    // ==================== argument parsing ====================

    #[test]
    fn test_home_flag_takes_precedence() {
        let cli = Cli::try_parse_from(["tfswap", "1.5.0", "--home", "/custom/root"]).unwrap();
        assert_eq!(cli.version, "1.5.0");
        assert_eq!(cli.home.as_deref(), Some(Path::new("/custom/root")));
    }

    #[test]
    fn test_home_falls_back_to_the_env_var() {
        // Process-wide, but the flag test above always passes --home
        unsafe { std::env::set_var("TFSWAP_HOME", "/env/root") };
        let cli = Cli::try_parse_from(["tfswap", "1.5.0"]).unwrap();
        assert_eq!(cli.home.as_deref(), Some(Path::new("/env/root")));
    }
}
