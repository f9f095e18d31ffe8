//! Version string validation and numeric derivation
//!
//! A version is a literal `v` followed by one or more dot-separated integer
//! groups (`v1`, `v6.7`, `v6.7.1`). The numeric form strips exactly the
//! leading tag character and is derived on demand, never stored.

use crate::core::error::{SyncError, SyncResult};
use regex::Regex;
use std::fmt;

const VERSION_SHAPE: &str = r"^v[0-9]+(\.[0-9]+)*$";

/// A validated version string, stored in its tagged form (e.g. `v6.7`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
  tag: String,
}

impl Version {
  /// Validate a candidate version string
  ///
  /// Fails with `InvalidFormat` on any shape mismatch; callers must abort
  /// the run before touching any file.
  pub fn parse(input: &str) -> SyncResult<Self> {
    let shape = Regex::new(VERSION_SHAPE)?;
    if !shape.is_match(input) {
      return Err(SyncError::InvalidFormat {
        input: input.to_string(),
      });
    }
    Ok(Self { tag: input.to_string() })
  }

  /// The tagged form, e.g. `v6.7`
  pub fn tag(&self) -> &str {
    &self.tag
  }

  /// The numeric form with the leading tag character removed, e.g. `6.7`
  pub fn numeric(&self) -> &str {
    &self.tag[1..]
  }
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.tag)
  }
}
