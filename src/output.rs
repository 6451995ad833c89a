//! Colored terminal output and download progress for tfswap
//!
//! Glyph-prefixed lines via owo-colors, spinners and byte bars via indicatif.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Spinner frames shared by every progress style
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// How often spinners redraw
const TICK_INTERVAL_MS: u64 = 80;

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable debug output for the rest of the process.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// Print a step header (bold blue "==>")
/// Example: "==> downloading terraform 1.5.0"
pub fn action(message: &str) {
    println!("{} {}", "==>".blue().bold(), message.bold());
}

/// Print an indented sub-line under the current step (dimmed)
/// Example: "     archive sha256 is abc123..."
pub fn detail(message: &str) {
    println!("     {}", message.dimmed());
}

/// Print a debug line (dimmed, only with --verbose)
pub fn debug(message: &str) {
    if VERBOSE.load(Ordering::Relaxed) {
        println!("     {} {}", "debug:".dimmed(), message.dimmed());
    }
}

/// Print a final confirmation (bold green "==>")
/// Example: "==> terraform 1.5.0 active"
pub fn success(message: &str) {
    println!("{} {}", "==>".green().bold(), message.green());
}

/// Print a status note (cyan "::")
pub fn info(message: &str) {
    println!("{} {}", "::".cyan(), message);
}

/// Print a warning on stderr (yellow)
pub fn warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message.yellow());
}

/// Create a spinner for a download whose size is not yet known.
///
/// Starts as a plain spinner. Call `upgrade_to_bytes()` once the server
/// reports a content length.
pub fn download_progress(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("     {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars(SPINNER_CHARS),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(TICK_INTERVAL_MS));
    pb
}

/// Swap a spinner for a byte bar once the total size is known.
pub fn upgrade_to_bytes(pb: &ProgressBar, total_bytes: u64) {
    pb.set_length(total_bytes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("     {spinner:.cyan} [{bar:30.cyan/dim}] {bytes}/{total_bytes} ({eta})")
            .unwrap()
            .progress_chars("━╸━"),
    );
}
