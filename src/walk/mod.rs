//! Directory tree counting logic
//!
//! This module provides the counting walk at the heart of fcount:
//!
//! - `TreeCounter`: walks every entry under a root directory with an
//!   explicit work-list and counts files matching a suffix
//! - `SuffixMatcher`: the case-insensitive file name suffix test
//! - `WalkConfig`: caller-resolved configuration for a single walk

mod config;
mod counter;
mod matcher;

// Re-export public types
pub use config::WalkConfig;
pub use counter::{CountSummary, TreeCounter};
pub use matcher::SuffixMatcher;
