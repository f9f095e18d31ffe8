//! Integration tests for the end-to-end sync flow

use crate::helpers::{TestProject, run_versync};
use anyhow::Result;

const USERSCRIPT: &str = "// ==UserScript==\n// @name     balance\n// @version 0.1\n// ==/UserScript==\nrun();\n";
const INJECT: &str = "\"use strict\";\nconst VERSION = \"0.1\";\nconsole.log(VERSION);\n";

#[test]
fn test_sync_end_to_end() -> Result<()> {
  // Canonical file absent, both targets present with markers
  let project = TestProject::new()?;
  project.write_file("tampermonkey.user.js", USERSCRIPT)?;
  project.write_file("vav4inject.js", INJECT)?;

  let output = run_versync(&project.path, &["v0.2"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert_eq!(project.read_file("VERSIONFILE")?, "v0.2\n");
  assert_eq!(
    project.read_file("tampermonkey.user.js")?,
    "// ==UserScript==\n// @name     balance\n// @version 0.2\n// ==/UserScript==\nrun();\n"
  );
  assert_eq!(
    project.read_file("vav4inject.js")?,
    "\"use strict\";\nconst VERSION = \"0.2\";\nconsole.log(VERSION);\n"
  );
  assert!(stdout.contains("none found"), "Absent canonical file reads as none");
  assert!(stdout.contains("sync complete"), "Should print completion banner");

  Ok(())
}

#[test]
fn test_sync_reports_prior_version() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("VERSIONFILE", "v0.1\n")?;

  let output = run_versync(&project.path, &["v0.2"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Current version: v0.1"));
  assert_eq!(project.read_file("VERSIONFILE")?, "v0.2\n");

  Ok(())
}

#[test]
fn test_missing_targets_are_skipped_not_created() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_versync(&project.path, &["v1.0"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert_eq!(project.read_file("VERSIONFILE")?, "v1.0\n");
  assert!(!project.file_exists("tampermonkey.user.js"));
  assert!(!project.file_exists("vav4inject.js"));
  assert!(stdout.contains("skipped"), "Skips should be reported");

  Ok(())
}

#[test]
fn test_markerless_target_is_left_byte_identical() -> Result<()> {
  let project = TestProject::new()?;
  let content = "// a userscript that never declared its version\nrun();\n";
  project.write_file("tampermonkey.user.js", content)?;
  project.write_file("vav4inject.js", INJECT)?;

  let output = run_versync(&project.path, &["v0.3"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert_eq!(project.read_file("tampermonkey.user.js")?, content);
  assert!(stdout.contains("No // @version marker found"));
  // The other target still gets rewritten
  assert!(project.read_file("vav4inject.js")?.contains("const VERSION = \"0.3\";"));

  Ok(())
}

#[test]
fn test_version_is_prompted_when_argument_omitted() -> Result<()> {
  use std::io::Write;
  use std::process::{Command, Stdio};

  let project = TestProject::new()?;
  project.write_file("vav4inject.js", INJECT)?;

  let mut child = Command::new(env!("CARGO_BIN_EXE_versync"))
    .current_dir(&project.path)
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()?;
  child
    .stdin
    .take()
    .expect("stdin should be piped")
    .write_all(b"v4.2\n")?;
  let output = child.wait_with_output()?;

  assert!(output.status.success());
  assert_eq!(project.read_file("VERSIONFILE")?, "v4.2\n");
  assert!(project.read_file("vav4inject.js")?.contains("const VERSION = \"4.2\";"));

  Ok(())
}
