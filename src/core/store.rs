//! Canonical version file read/write
//!
//! The record is a single line of text holding the tagged version. Prior
//! content is only ever trimmed on read, never parsed further.

use crate::core::error::SyncResult;
use crate::core::version::Version;
use std::fs;
use std::path::Path;

/// Read the currently stored version, trimmed of surrounding whitespace
///
/// An absent file is not a failure; it means no version has been recorded yet.
pub fn read_current(path: &Path) -> SyncResult<Option<String>> {
  if !path.exists() {
    return Ok(None);
  }
  let content = fs::read_to_string(path)?;
  Ok(Some(content.trim().to_string()))
}

/// Overwrite the canonical file with the tagged version plus a trailing newline
pub fn write_version(path: &Path, version: &Version) -> SyncResult<()> {
  fs::write(path, format!("{}\n", version.tag()))?;
  Ok(())
}
