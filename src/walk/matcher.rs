//! Case-insensitive suffix matching for file names

/// Matcher for a fixed, case-insensitive file name suffix.
///
/// The suffix is normalized once at construction: lowercased, with a
/// leading dot supplied if missing, so `"EXE"`, `"exe"`, and `".exe"` are
/// all equivalent.
#[derive(Debug, Clone)]
pub struct SuffixMatcher {
    suffix: String,
}

impl SuffixMatcher {
    pub fn new(suffix: &str) -> Self {
        let lower = suffix.to_lowercase();
        let suffix = if lower.starts_with('.') {
            lower
        } else {
            format!(".{}", lower)
        };
        Self { suffix }
    }

    /// The normalized suffix, e.g. ".exe".
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Check whether a file name ends with the suffix, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().ends_with(&self.suffix)
    }
}
