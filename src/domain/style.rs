//! Pre-release suffix styles.
//!
//! `rc` renders `1.2.3rc4`, `.dev` renders `1.2.3.dev4`.

use crate::error::{BumpError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Suffix appended to versions that are not yet released
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SuffixStyle {
    /// Release candidate, e.g. `1.3.0rc12`
    #[default]
    #[serde(rename = "rc")]
    ReleaseCandidate,
    /// Development release, e.g. `1.3.0.dev12`
    #[serde(rename = ".dev")]
    DevRelease,
}

impl SuffixStyle {
    /// The literal text placed between the version and the counter
    pub fn marker(&self) -> &'static str {
        match self {
            SuffixStyle::ReleaseCandidate => "rc",
            SuffixStyle::DevRelease => ".dev",
        }
    }
}

impl FromStr for SuffixStyle {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rc" => Ok(SuffixStyle::ReleaseCandidate),
            ".dev" => Ok(SuffixStyle::DevRelease),
            other => Err(BumpError::config(format!(
                "Unknown suffix style '{}': expected 'rc' or '.dev'",
                other
            ))),
        }
    }
}

impl fmt::Display for SuffixStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_styles() {
        assert_eq!("rc".parse::<SuffixStyle>().unwrap(), SuffixStyle::ReleaseCandidate);
        assert_eq!(".dev".parse::<SuffixStyle>().unwrap(), SuffixStyle::DevRelease);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("dev".parse::<SuffixStyle>().is_err());
        assert!("RC".parse::<SuffixStyle>().is_err());
        assert!("".parse::<SuffixStyle>().is_err());
    }

    #[test]
    fn test_display_matches_marker() {
        assert_eq!(SuffixStyle::ReleaseCandidate.to_string(), "rc");
        assert_eq!(SuffixStyle::DevRelease.to_string(), ".dev");
    }

    #[test]
    fn test_default_is_rc() {
        assert_eq!(SuffixStyle::default(), SuffixStyle::ReleaseCandidate);
    }
}
