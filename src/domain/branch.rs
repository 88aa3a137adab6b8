use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

/// Classification of the branch a version is being computed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    /// `master` or `main`
    Master,
    /// `bugfix-X.Y.Z`, patching an already released version
    BugfixBranch { major: u32, minor: u32, bugfix: u32 },
    /// `release-...` or `release/...`
    ReleaseBranch,
    /// Anything else, including a detached HEAD (empty name)
    Other,
}

impl BranchKind {
    /// Classify a branch name, ignoring a leading namespace prefix
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(BranchKind::classify("master", ""), BranchKind::Master);
    /// assert_eq!(
    ///     BranchKind::classify("fred/bugfix-0.1.0", "fred/"),
    ///     BranchKind::BugfixBranch { major: 0, minor: 1, bugfix: 0 }
    /// );
    /// ```
    pub fn classify(branch: &str, prefix: &str) -> Self {
        let name = branch.trim();
        let name = if prefix.is_empty() {
            name
        } else {
            match name.strip_prefix(prefix) {
                Some(rest) => rest,
                None => return BranchKind::Other,
            }
        };

        if matches!(name, "master" | "main") {
            return BranchKind::Master;
        }

        lazy_static! {
            static ref BUGFIX_REGEX: Regex =
                Regex::new(r"^bugfix-(\d+)\.(\d+)\.(\d+)$").expect("bad regex");
        }

        let bugfix = BUGFIX_REGEX.captures(name).and_then(|captures| {
            let major = captures.get(1)?.as_str().parse().ok()?;
            let minor = captures.get(2)?.as_str().parse().ok()?;
            let bugfix = captures.get(3)?.as_str().parse().ok()?;
            Some(BranchKind::BugfixBranch {
                major,
                minor,
                bugfix,
            })
        });
        if let Some(kind) = bugfix {
            return kind;
        }

        if name.starts_with("release-") || name.starts_with("release/") {
            return BranchKind::ReleaseBranch;
        }

        BranchKind::Other
    }

    pub fn is_bugfix(&self) -> bool {
        matches!(self, BranchKind::BugfixBranch { .. })
    }
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchKind::Master => write!(f, "master"),
            BranchKind::BugfixBranch {
                major,
                minor,
                bugfix,
            } => write!(f, "bugfix {}.{}.{}", major, minor, bugfix),
            BranchKind::ReleaseBranch => write!(f, "release"),
            BranchKind::Other => write!(f, "other"),
        }
    }
}
