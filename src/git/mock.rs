use crate::error::{BumpError, Result};
use crate::git::Repository;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    descriptors: HashMap<String, String>,
    branch: String,
    fetch_error: Option<String>,
    fetched: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a new mock repository on `master` with no tags
    pub fn new() -> Self {
        MockRepository {
            descriptors: HashMap::new(),
            branch: "master".to_string(),
            fetch_error: None,
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// Make `describe(pattern)` return `descriptor`
    pub fn add_descriptor(&mut self, pattern: impl Into<String>, descriptor: impl Into<String>) {
        self.descriptors.insert(pattern.into(), descriptor.into());
    }

    /// Set the checked-out branch, empty for a detached HEAD
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = branch.into();
    }

    /// Make every fetch fail with `reason`
    pub fn fail_fetch(&mut self, reason: impl Into<String>) {
        self.fetch_error = Some(reason.into());
    }

    /// Remotes that fetch was called with, in order
    pub fn fetched_remotes(&self) -> Vec<String> {
        self.fetched
            .lock()
            .map(|fetched| fetched.clone())
            .unwrap_or_default()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn describe(&self, pattern: &str) -> Result<Option<String>> {
        Ok(self.descriptors.get(pattern).cloned())
    }

    fn current_branch(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        if let Ok(mut fetched) = self.fetched.lock() {
            fetched.push(remote.to_string());
        }

        match &self.fetch_error {
            Some(reason) => Err(BumpError::repository(reason.clone())),
            None => Ok(()),
        }
    }
}
