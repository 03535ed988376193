//! Shared test utilities for orgdir
//!
//! - Record and store fixtures
//! - TUI terminal testing helpers

pub mod fixtures;
pub mod terminal;
