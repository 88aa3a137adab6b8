use thiserror::Error;

/// Unified error type for mister-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Malformed descriptor '{raw}': {reason}")]
    MalformedDescriptor { raw: String, reason: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in mister-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a malformed descriptor error naming the offending raw string
    pub fn malformed(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        BumpError::MalformedDescriptor {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        BumpError::Repository(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Whether this error came from an unparseable descriptor
    pub fn is_malformed_descriptor(&self) -> bool {
        matches!(self, BumpError::MalformedDescriptor { .. })
    }
}
