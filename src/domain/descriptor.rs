//! Parsing of `git describe` output for release tags.
//!
//! Accepted shapes, after an optional namespace prefix:
//!
//! - `release-1.2.0` (HEAD is the tagged commit)
//! - `release-1.2.0-456-ge02af` (456 commits past the tag)
//! - `release-1.2.0-final-456-ge02af` (past a closed release)
//! - `release-1.2.0.final-456`, `release-1.2.0-456-aaaaa` (hand-written overrides)

use crate::domain::version::{ReleaseKind, Version};
use crate::error::{BumpError, Result};
use lazy_static::lazy_static;
use regex::Regex;

const DESCRIPTOR_PATTERN: &str =
    r"^release-(\d+)\.(\d+)\.(\d+)([-.]final)?(?:-(\d+)(?:-g?([0-9a-f]+))?)?$";

/// Outcome of parsing a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    /// No tag matching the release convention is reachable
    NoVersionYet,
    /// A release tag was found
    Tagged(Version),
}

impl Descriptor {
    pub fn version(&self) -> Option<&Version> {
        match self {
            Descriptor::NoVersionYet => None,
            Descriptor::Tagged(version) => Some(version),
        }
    }
}

/// Parse a raw descriptor, or report that there is no version yet when `raw` is `None`.
///
/// `prefix` must lead the descriptor when it is non-empty and is removed before matching.
///
/// # Returns
/// * `Ok(Descriptor::NoVersionYet)` - `raw` was `None`
/// * `Ok(Descriptor::Tagged(_))` - `raw` matched the release grammar
/// * `Err(BumpError::MalformedDescriptor)` - `raw` did not match, or the prefix was missing
pub fn parse_descriptor(raw: Option<&str>, prefix: &str) -> Result<Descriptor> {
    let Some(raw) = raw else {
        return Ok(Descriptor::NoVersionYet);
    };

    let trimmed = raw.trim();
    let unprefixed = if prefix.is_empty() {
        trimmed
    } else {
        trimmed.strip_prefix(prefix).ok_or_else(|| {
            BumpError::malformed(raw, format!("expected tag prefix '{}'", prefix))
        })?
    };

    lazy_static! {
        static ref DESCRIPTOR_REGEX: Regex = Regex::new(DESCRIPTOR_PATTERN).expect("bad regex");
    }

    let captures = DESCRIPTOR_REGEX.captures(unprefixed).ok_or_else(|| {
        BumpError::malformed(
            raw,
            "expected release-<major>.<minor>.<bugfix>[-final][-<deviation>-g<hash>]",
        )
    })?;

    let number = |index: usize, name: &str| -> Result<u32> {
        match captures.get(index) {
            Some(m) => m.as_str().parse::<u32>().map_err(|_| {
                BumpError::malformed(raw, format!("invalid {} number '{}'", name, m.as_str()))
            }),
            None => Ok(0),
        }
    };

    // Any of the three may be advanced later, so u32::MAX is out of range.
    let component = |index: usize, name: &str| -> Result<u32> {
        let value = number(index, name)?;
        if value == u32::MAX {
            return Err(BumpError::malformed(
                raw,
                format!("{} component too large to increment", name),
            ));
        }
        Ok(value)
    };

    let major = component(1, "major")?;
    let minor = component(2, "minor")?;
    let bugfix = component(3, "bugfix")?;
    let deviation = number(5, "deviation")?;

    let kind = if captures.get(4).is_some() {
        ReleaseKind::Final
    } else {
        ReleaseKind::Candidate
    };
    let hash = captures.get(6).map(|m| m.as_str()).unwrap_or_default();

    Ok(Descriptor::Tagged(
        Version::new(major, minor, bugfix, kind).with_deviation(deviation, hash),
    ))
}
