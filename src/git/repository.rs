use crate::error::{BumpError, Result};
use git2::{DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode, Repository as Git2Repo};
use std::path::Path;
use std::sync::Mutex;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Mutex<Git2Repo>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)
            .map_err(|e| BumpError::repository(format!("Not in a git repository: {}", e)))?;

        Ok(Git2Repository::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo: Mutex::new(repo),
        }
    }

    fn with_repo<T>(&self, f: impl FnOnce(&Git2Repo) -> Result<T>) -> Result<T> {
        let repo = self
            .repo
            .lock()
            .map_err(|_| BumpError::repository("Repository handle is poisoned"))?;
        f(&repo)
    }
}

/// libgit2 reports "no tag can describe HEAD" as either NotFound or a bare
/// describe-class error, and an unborn HEAD as NotFound or UnbornBranch.
fn is_nothing_to_describe(e: &git2::Error) -> bool {
    matches!(e.code(), ErrorCode::NotFound | ErrorCode::UnbornBranch)
        || e.class() == ErrorClass::Describe
}

impl super::Repository for Git2Repository {
    fn describe(&self, pattern: &str) -> Result<Option<String>> {
        self.with_repo(|repo| {
            let mut options = DescribeOptions::new();
            options.describe_tags().pattern(pattern);

            let describe = match repo.describe(&options) {
                Ok(describe) => describe,
                Err(e) if is_nothing_to_describe(&e) => {
                    log::debug!("No tag matching '{}' can describe HEAD: {}", pattern, e);
                    return Ok(None);
                }
                Err(e) => return Err(e.into()),
            };

            let mut format = DescribeFormatOptions::new();
            format.abbreviated_size(4);
            let descriptor = describe.format(Some(&format))?;

            log::debug!("git describe --match {} -> {}", pattern, descriptor);
            Ok(Some(descriptor))
        })
    }

    fn current_branch(&self) -> Result<String> {
        self.with_repo(|repo| {
            let head = match repo.head() {
                Ok(head) => head,
                Err(e) if e.code() == ErrorCode::UnbornBranch => {
                    // Fresh repository: HEAD names a branch with no commits yet.
                    let head_ref = repo.find_reference("HEAD")?;
                    let target = head_ref.symbolic_target().unwrap_or_default();
                    return Ok(target.trim_start_matches("refs/heads/").to_string());
                }
                Err(e) => return Err(e.into()),
            };

            if !head.is_branch() {
                return Ok(String::new());
            }

            Ok(head.shorthand().unwrap_or_default().to_string())
        })
    }

    fn fetch(&self, remote_name: &str) -> Result<()> {
        self.with_repo(|repo| {
            let mut remote = repo.find_remote(remote_name).map_err(|e| {
                BumpError::repository(format!("Cannot find remote '{}': {}", remote_name, e))
            })?;

            let mut callbacks = git2::RemoteCallbacks::new();
            callbacks.credentials(|_url, username_from_url, allowed_types| {
                let username = username_from_url.unwrap_or("git");

                if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                    if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
                        return Ok(cred);
                    }

                    if let Some(home) = dirs::home_dir() {
                        for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                            let path = home.join(".ssh").join(key);
                            if path.exists() {
                                if let Ok(cred) = git2::Cred::ssh_key(username, None, &path, None) {
                                    return Ok(cred);
                                }
                            }
                        }
                    }
                }

                git2::Cred::default()
            });

            let mut fetch_options = git2::FetchOptions::new();
            fetch_options.remote_callbacks(callbacks);

            let refspec_heads = format!("+refs/heads/*:refs/remotes/{}/*", remote_name);
            let refspecs = [refspec_heads.as_str(), "+refs/tags/*:refs/tags/*"];
            remote
                .fetch(&refspecs, Some(&mut fetch_options), None)
                .map_err(|e| {
                    BumpError::repository(format!(
                        "Failed to fetch from remote '{}': {}",
                        remote_name, e
                    ))
                })?;

            log::debug!("Fetched tags from remote '{}'", remote_name);
            Ok(())
        })
    }
}
