//! The set of files a sync run operates on
//!
//! There is deliberately no configuration file: the three paths are fixed by
//! project convention and only their root directory varies (which is what the
//! tests override).

use std::path::{Path, PathBuf};

/// File name of the canonical single-line version record
pub const VERSION_FILE: &str = "VERSIONFILE";
/// Target file carrying a `// @version <value>` userscript annotation
pub const USERSCRIPT_FILE: &str = "tampermonkey.user.js";
/// Target file carrying a `const VERSION = "<value>";` declaration
pub const INJECT_FILE: &str = "vav4inject.js";

/// The three files a sync run reads and writes
#[derive(Debug, Clone)]
pub struct SyncConfig {
  /// Canonical version record, the source of truth
  pub version_file: PathBuf,
  /// Userscript whose `@version` annotation is kept in sync
  pub userscript_file: PathBuf,
  /// Injected script whose `VERSION` constant is kept in sync
  pub inject_file: PathBuf,
}

impl SyncConfig {
  /// Resolve the conventional file names against a project root
  pub fn from_root(root: &Path) -> Self {
    Self {
      version_file: root.join(VERSION_FILE),
      userscript_file: root.join(USERSCRIPT_FILE),
      inject_file: root.join(INJECT_FILE),
    }
  }
}
