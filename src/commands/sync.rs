//! Sync command implementation
//!
//! Three steps, strictly in sequence:
//! 1. read the currently stored version (absence is fine)
//! 2. validate the new version and write the canonical file
//! 3. rewrite the marker in each target file, skipping absent files
//!
//! Validation happens before any write, so an invalid version aborts the run
//! with no side effects. Missing targets and unmatched markers are reported
//! and skipped; they are expected in projects that have not adopted every
//! target file yet.

use crate::core::config::SyncConfig;
use crate::core::error::{ResultExt, SyncResult};
use crate::core::rewrite::{Marker, RewriteOutcome};
use crate::core::store;
use crate::core::version::Version;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Run the sync command
pub fn run_sync(config: &SyncConfig, new_version: Option<String>) -> SyncResult<()> {
  let current = store::read_current(&config.version_file)
    .with_context(|| format!("Failed to read {}", file_name(&config.version_file)))?;
  println!("📄 Current version: {}", current.as_deref().unwrap_or("none found"));

  let candidate = match new_version {
    Some(arg) => arg,
    None => prompt_for_version()?,
  };

  // Fatal on mismatch; nothing has been written yet
  let version = Version::parse(&candidate)?;

  store::write_version(&config.version_file, &version)
    .with_context(|| format!("Failed to update {}", file_name(&config.version_file)))?;
  println!("✅ Updated {} → {}", file_name(&config.version_file), version);

  apply_marker(&Marker::userscript_version()?, &config.userscript_file, &version)?;
  apply_marker(&Marker::const_version()?, &config.inject_file, &version)?;

  println!();
  println!("🎯 Version sync complete!");
  println!();

  Ok(())
}

/// Apply one marker to one target file and report the outcome
fn apply_marker(marker: &Marker, path: &Path, version: &Version) -> SyncResult<()> {
  match marker.apply(path, version.numeric())? {
    RewriteOutcome::Updated(_) => {
      println!("✅ Updated {} → {}", file_name(path), version.numeric());
    }
    RewriteOutcome::MarkerNotFound => {
      println!("⚠️  No {} marker found in {}", marker.label, file_name(path));
    }
    RewriteOutcome::FileMissing => {
      println!("⚠️  {} not found — skipped", file_name(path));
    }
  }
  Ok(())
}

/// Ask the controlling terminal for the new version
fn prompt_for_version() -> SyncResult<String> {
  print!("Enter new version (e.g. v6.7): ");
  io::stdout().flush()?;

  let mut line = String::new();
  io::stdin().lock().read_line(&mut line)?;
  Ok(line.trim().to_string())
}

fn file_name(path: &Path) -> String {
  path
    .file_name()
    .map(|n| n.to_string_lossy().to_string())
    .unwrap_or_else(|| path.display().to_string())
}
