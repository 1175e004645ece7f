//! fcount - counts files whose name ends in a given extension, recursively

pub mod output;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{print_summary, print_summary_json};
pub use walk::{CountSummary, SuffixMatcher, TreeCounter, WalkConfig};
