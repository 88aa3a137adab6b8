//! Git operations abstraction layer
//!
//! The version rules never talk to git directly. They receive a raw
//! descriptor and a branch name gathered through the [Repository] trait,
//! which has two implementations:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! ```rust
//! # use mister_bump::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let descriptor = repo.describe("release-*")?;
//! let branch = repo.current_branch()?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only view of a repository used to derive a version
///
/// ## Error Handling
///
/// Absence is data: a pattern with no reachable tag is `Ok(None)` and a
/// detached HEAD is an empty branch name. Errors are reserved for a
/// repository that cannot be read at all.
pub trait Repository: Send + Sync {
    /// Describe HEAD against the nearest tag matching `pattern`
    ///
    /// Equivalent to `git describe --tags --abbrev=4 --match <pattern>`.
    ///
    /// # Returns
    /// * `Ok(Some(descriptor))` - e.g. "release-0.3.0-final-1-gc68c", or just
    ///   the tag name when HEAD is the tagged commit
    /// * `Ok(None)` - No tag matching `pattern` is reachable from HEAD
    /// * `Err` - If the repository cannot be read
    fn describe(&self, pattern: &str) -> Result<Option<String>>;

    /// Short name of the checked-out branch, empty when HEAD is detached
    fn current_branch(&self) -> Result<String>;

    /// Fetch tags and remote heads from `remote`
    ///
    /// Only tags and remote-tracking references are updated; local branches
    /// are left untouched.
    fn fetch(&self, remote: &str) -> Result<()>;
}
