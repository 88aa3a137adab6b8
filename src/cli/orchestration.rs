//! Bump workflow orchestration
//!
//! Gathers the raw descriptor and branch name from the repository (or from
//! explicit arguments), then hands them to the pure version rules. Kept apart
//! from main.rs so the workflow can be driven without clap.

use std::env;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{parse_descriptor, Descriptor, SuffixStyle, TagPattern};
use crate::error::{BumpError, Result};
use crate::git::Repository;
use crate::resolver::{resolve, ResolutionContext};

/// CI variables consulted for the branch name, in order.
/// Detached CI checkouts still know which branch they build.
pub const BRANCH_ENV_VARS: [&str; 2] = ["CI_COMMIT_REF_NAME", "CI_BUILD_REF_NAME"];

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpArgs {
    /// Descriptor used instead of querying git, e.g. "release-0.0.0-000-aaaaaa"
    pub override_descriptor: Option<String>,

    /// Explicit branch name, skipping CI variables and the repository
    pub branch: Option<String>,

    pub style: SuffixStyle,

    /// Advance to the next version
    pub increment: bool,

    pub prefix: String,

    /// Fetch tags from `remote` before describing
    pub fetch: bool,

    pub remote: String,

    pub tag_patterns: Vec<TagPattern>,
}

impl BumpArgs {
    /// Arguments taken entirely from configuration
    pub fn from_config(config: &Config) -> Self {
        BumpArgs {
            override_descriptor: None,
            branch: None,
            style: config.style,
            increment: !config.no_increment,
            prefix: config.prefix.clone(),
            fetch: config.fetch,
            remote: config.remote.clone(),
            tag_patterns: config.patterns(),
        }
    }
}

impl Default for BumpArgs {
    fn default() -> Self {
        BumpArgs::from_config(&Config::default())
    }
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    /// The computed version string
    pub version: String,

    /// The raw descriptor the version was derived from, `None` when no tag exists
    pub descriptor: Option<String>,

    /// The branch name the rules were applied to
    pub branch: String,

    /// Non-fatal problems met on the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Main bump workflow
///
/// 1. Take the override descriptor, or fetch and describe the repository
/// 2. Determine the branch name
/// 3. Parse and resolve the version
///
/// A repository is only required when no override descriptor is given.
pub fn execute_bump(repo: Option<&dyn Repository>, args: &BumpArgs) -> Result<BumpOutcome> {
    let mut warnings = Vec::new();

    let descriptor = match &args.override_descriptor {
        Some(raw) => {
            log::debug!("Using override version '{}'", raw);
            Some(raw.clone())
        }
        None => {
            let repo = repo.ok_or_else(|| {
                BumpError::repository("A git repository is required when no version override is given")
            })?;
            describe_repository(repo, args, &mut warnings)?
        }
    };

    let branch = detect_branch(repo, args, &mut warnings)?;

    let version = parse_descriptor(descriptor.as_deref(), &args.prefix)?;
    let ctx = ResolutionContext {
        version,
        branch: branch.clone(),
        style: args.style,
        increment: args.increment,
        prefix: args.prefix.clone(),
    };

    Ok(BumpOutcome {
        version: resolve(&ctx),
        descriptor,
        branch,
        warnings,
    })
}

/// Find the closest release tag across all configured patterns.
///
/// Each pattern is described separately and the candidate with the smallest
/// deviation wins; the first pattern wins ties.
fn describe_repository(
    repo: &dyn Repository,
    args: &BumpArgs,
    warnings: &mut Vec<BoundaryWarning>,
) -> Result<Option<String>> {
    if args.fetch {
        log::debug!("Fetching tags from remote '{}'", args.remote);
        if let Err(e) = repo.fetch(&args.remote) {
            log::warn!("Failed to fetch from '{}': {}", args.remote, e);
            warnings.push(BoundaryWarning::FetchFailed {
                remote: args.remote.clone(),
                reason: e.to_string(),
            });
        }
    }

    let patterns: Vec<String> = args
        .tag_patterns
        .iter()
        .map(|pattern| pattern.with_prefix(&args.prefix))
        .collect();
    log::debug!("Searching for the following tags: {}", patterns.join(", "));

    let mut selected: Option<(String, u32)> = None;
    for pattern in &patterns {
        let Some(raw) = repo.describe(pattern)? else {
            continue;
        };

        let deviation = match parse_descriptor(Some(raw.as_str()), &args.prefix)? {
            Descriptor::Tagged(version) => version.deviation,
            Descriptor::NoVersionYet => continue,
        };
        log::debug!("Candidate '{}' with deviation {}", raw, deviation);

        let closer = selected
            .as_ref()
            .map_or(true, |(_, best)| deviation < *best);
        if closer {
            selected = Some((raw, deviation));
        }
    }

    match selected {
        Some((raw, _)) => {
            log::debug!("Version detected as '{}'", raw);
            Ok(Some(raw))
        }
        None => {
            warnings.push(BoundaryWarning::NoReleaseTag { patterns });
            Ok(None)
        }
    }
}

/// Branch name from the explicit argument, CI variables, or the repository
fn detect_branch(
    repo: Option<&dyn Repository>,
    args: &BumpArgs,
    warnings: &mut Vec<BoundaryWarning>,
) -> Result<String> {
    if let Some(branch) = &args.branch {
        return Ok(branch.clone());
    }

    for var in BRANCH_ENV_VARS {
        if let Ok(branch) = env::var(var) {
            if !branch.is_empty() {
                log::debug!("Current git branch is {} (from {})", branch, var);
                return Ok(branch);
            }
        }
    }

    let Some(repo) = repo else {
        return Ok(String::new());
    };

    let branch = repo.current_branch()?;
    if branch.is_empty() {
        warnings.push(BoundaryWarning::DetachedHead);
    }
    log::debug!("Current git branch is '{}'", branch);
    Ok(branch)
}
