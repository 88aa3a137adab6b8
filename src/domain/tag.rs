/// Glob handed to `git describe --match` (e.g., "release-*")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// The pattern restricted to a namespace
    /// Example: prefix="fred/", pattern="release-*" -> "fred/release-*"
    pub fn with_prefix(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.pattern)
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern::new("release-*")
    }
}
