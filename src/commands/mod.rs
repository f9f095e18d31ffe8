//! CLI commands for versync
//!
//! - **sync**: read the canonical version, validate the new one, and rewrite
//!   every target file marker

pub mod sync;

pub use sync::run_sync;
