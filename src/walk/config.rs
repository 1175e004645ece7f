//! Configuration types for the tree counter

/// Configuration for a counting walk.
///
/// The suffix is resolved by the caller (CLI flag or its default) before
/// the walk starts; the counter itself carries no implicit defaults.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// File name suffix to count, e.g. ".exe". Compared case-insensitively
    /// against the tail of each file name.
    pub suffix: String,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            suffix: ".exe".to_string(),
        }
    }
}
