//! Core engine for versync operations
//!
//! - **config**: the three project file paths, resolved from a root directory
//! - **error**: error types with contextual help messages and exit codes
//! - **version**: version string validation and numeric derivation
//! - **store**: canonical version file read/write
//! - **rewrite**: regex marker rewriting in target files

pub mod config;
pub mod error;
pub mod rewrite;
pub mod store;
pub mod version;
