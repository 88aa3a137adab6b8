//! Version resolution and formatting.
//!
//! Turns a parsed [`Descriptor`] plus the current branch into the version
//! string to publish. Every decision is reported to a [`Trace`] so callers
//! can log or inspect the path taken without any global state.

use crate::domain::{BranchKind, Descriptor, Increment, SuffixStyle, Version};

/// Everything the resolver needs, gathered by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionContext {
    pub version: Descriptor,
    /// Current branch name, empty when detached or unknown
    pub branch: String,
    pub style: SuffixStyle,
    /// Advance to the next version instead of reporting the current one
    pub increment: bool,
    /// Namespace prefix shared by tags and branches
    pub prefix: String,
}

/// A decision point reached while resolving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision<'a> {
    /// The descriptor the resolution starts from
    Parsed(&'a Descriptor),
    /// How the branch was classified
    Branch(BranchKind),
    /// The component that will be advanced, `None` when nothing is
    Increment(Option<Increment>),
    /// The rendered version string
    Formatted(&'a str),
}

/// Receiver for resolver decisions
pub trait Trace {
    fn record(&mut self, decision: &Decision<'_>);
}

impl<F> Trace for F
where
    F: FnMut(&Decision<'_>),
{
    fn record(&mut self, decision: &Decision<'_>) {
        (self)(decision)
    }
}

/// Forwards decisions to the `log` crate at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl Trace for LogTrace {
    fn record(&mut self, decision: &Decision<'_>) {
        match decision {
            Decision::Parsed(Descriptor::NoVersionYet) => {
                log::debug!("No release tag found, bootstrapping from 0.1.0");
            }
            Decision::Parsed(Descriptor::Tagged(version)) => {
                log::debug!(
                    "Parsed version {} ({:?}), deviation {}, hash '{}'",
                    version,
                    version.kind,
                    version.deviation,
                    version.hash
                );
            }
            Decision::Branch(kind) => log::debug!("Branch classified as {}", kind),
            Decision::Increment(Some(increment)) => {
                log::debug!("Incrementing with {} version increment", increment)
            }
            Decision::Increment(None) => log::debug!("No increment will be performed"),
            Decision::Formatted(version) => log::debug!("Formatted version is '{}'", version),
        }
    }
}

/// Render a version number, with a pre-release suffix when `counter` is set.
///
/// # Example
/// ```ignore
/// assert_eq!(format_version(1, 2, 3, None, SuffixStyle::ReleaseCandidate), "1.2.3");
/// assert_eq!(format_version(1, 2, 3, Some(459), SuffixStyle::ReleaseCandidate), "1.2.3rc459");
/// assert_eq!(format_version(1, 2, 3, Some(459), SuffixStyle::DevRelease), "1.2.3.dev459");
/// ```
pub fn format_version(
    major: u32,
    minor: u32,
    bugfix: u32,
    counter: Option<u32>,
    style: SuffixStyle,
) -> String {
    match counter {
        None => format!("{}.{}.{}", major, minor, bugfix),
        Some(n) => format!("{}.{}.{}{}{}", major, minor, bugfix, style.marker(), n),
    }
}

/// Resolve the version string, logging decisions through [`LogTrace`]
pub fn resolve(ctx: &ResolutionContext) -> String {
    resolve_with(ctx, &mut LogTrace)
}

/// Resolve the version string, reporting each decision to `trace`
pub fn resolve_with(ctx: &ResolutionContext, trace: &mut dyn Trace) -> String {
    trace.record(&Decision::Parsed(&ctx.version));

    let rendered = match &ctx.version {
        Descriptor::NoVersionYet => {
            trace.record(&Decision::Increment(None));
            format_version(0, 1, 0, Some(1), ctx.style)
        }
        Descriptor::Tagged(version) => resolve_tagged(version, ctx, trace),
    };

    trace.record(&Decision::Formatted(&rendered));
    rendered
}

fn resolve_tagged(version: &Version, ctx: &ResolutionContext, trace: &mut dyn Trace) -> String {
    // A candidate tag already names the release in progress.
    if !ctx.increment || !version.is_final() {
        trace.record(&Decision::Increment(None));
        let counter = if version.is_final() && version.deviation == 0 {
            None
        } else {
            Some(version.suffix_counter())
        };
        let (major, minor, bugfix) = version.triple();
        return format_version(major, minor, bugfix, counter, ctx.style);
    }

    let branch = BranchKind::classify(&ctx.branch, &ctx.prefix);
    trace.record(&Decision::Branch(branch));

    let increment = increment_for(version, branch);
    trace.record(&Decision::Increment(Some(increment)));

    let next = version.bump(increment);
    format_version(
        next.major,
        next.minor,
        next.bugfix,
        Some(version.suffix_counter()),
        ctx.style,
    )
}

/// Choose the component to advance past a final release.
fn increment_for(version: &Version, branch: BranchKind) -> Increment {
    match branch {
        // Same release line, at or past the branch point: later patch
        // releases tagged on the branch keep advancing the bugfix number.
        BranchKind::BugfixBranch {
            major,
            minor,
            bugfix,
        } if major == version.major && minor == version.minor && version.bugfix >= bugfix => {
            Increment::Bugfix
        }
        BranchKind::BugfixBranch { .. } => Increment::Minor,
        BranchKind::Master | BranchKind::ReleaseBranch | BranchKind::Other => Increment::Major,
    }
}
