use std::fmt;

/// Non-fatal conditions met while gathering inputs from the repository.
/// A version is still produced; these are reported to the user on stderr.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Fetching tags failed, local tags were used instead
    FetchFailed { remote: String, reason: String },
    /// No tag matched any of the searched patterns
    NoReleaseTag { patterns: Vec<String> },
    /// HEAD is not on a branch, so no branch rules apply
    DetachedHead,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::FetchFailed { remote, reason } => {
                write!(
                    f,
                    "Could not fetch tags from remote '{}': {}. Using local tags.",
                    remote, reason
                )
            }
            BoundaryWarning::NoReleaseTag { patterns } => {
                write!(
                    f,
                    "No tag matching {} found, starting from 0.1.0",
                    patterns.join(", ")
                )
            }
            BoundaryWarning::DetachedHead => {
                write!(f, "HEAD is detached, branch-specific rules will not apply")
            }
        }
    }
}
