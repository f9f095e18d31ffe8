//! Regex marker rewriting in target files
//!
//! A marker is a fixed pattern whose capture groups bracket the version
//! value. Applying a marker rewrites only the value portion of each match;
//! every surrounding byte of the file is preserved. The new content is
//! computed fully in memory before the file is written back, so a failure
//! mid-run leaves the prior content intact.

use crate::core::error::SyncResult;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Result of applying a marker to a target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
  /// Pattern matched; file rewritten. Carries the match count.
  Updated(usize),
  /// File exists but the pattern never matched; nothing written
  MarkerNotFound,
  /// File does not exist; step skipped
  FileMissing,
}

/// A version marker inside a target file
pub struct Marker {
  /// Human-readable name of the marker, used in status output
  pub label: &'static str,
  pattern: Regex,
  /// Replacement template with `${n}` backreferences around the value slot
  template_prefix: &'static str,
  template_suffix: &'static str,
}

impl Marker {
  /// The `// @version <value>` annotation of a userscript metadata block
  ///
  /// Comment marker, keyword, and internal whitespace are captured and
  /// re-emitted exactly as matched.
  pub fn userscript_version() -> SyncResult<Self> {
    Ok(Self {
      label: "// @version",
      pattern: Regex::new(r"(//\s*@version\s+)[0-9.]+")?,
      template_prefix: "${1}",
      template_suffix: "",
    })
  }

  /// The `const VERSION = "<value>";` declaration of an injected script
  pub fn const_version() -> SyncResult<Self> {
    Ok(Self {
      label: "const VERSION",
      pattern: Regex::new(r#"(const\s+VERSION\s*=\s*")[0-9.]+(";)"#)?,
      template_prefix: "${1}",
      template_suffix: "${2}",
    })
  }

  /// Rewrite every occurrence of the marker in `path` to `numeric`
  ///
  /// The file is written back only when at least one match was found.
  pub fn apply(&self, path: &Path, numeric: &str) -> SyncResult<RewriteOutcome> {
    if !path.exists() {
      return Ok(RewriteOutcome::FileMissing);
    }

    let content = fs::read_to_string(path)?;
    let count = self.pattern.find_iter(&content).count();
    if count == 0 {
      return Ok(RewriteOutcome::MarkerNotFound);
    }

    // `numeric` is digits and dots only, so it cannot be mistaken for
    // template syntax by the replacer
    let replacement = format!("{}{}{}", self.template_prefix, numeric, self.template_suffix);
    let new_content = self.pattern.replace_all(&content, replacement.as_str());
    fs::write(path, new_content.as_bytes())?;

    Ok(RewriteOutcome::Updated(count))
  }
}
