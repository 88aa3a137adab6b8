use crate::domain::{SuffixStyle, TagPattern};
use crate::error::{BumpError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "misterbump.toml";

/// Represents the complete configuration for mister-bump.
///
/// Every key is optional; command-line flags take precedence over file values.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Suffix style for unreleased versions, "rc" or ".dev"
    pub style: SuffixStyle,

    /// Namespace expected in front of release tags and bugfix branches
    pub prefix: String,

    /// Report the current version instead of the next one
    pub no_increment: bool,

    /// Fetch tags from `remote` before describing
    pub fetch: bool,

    pub remote: String,

    /// Globs handed to `git describe --match`, before the prefix is applied
    pub tag_patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            style: SuffixStyle::default(),
            prefix: String::new(),
            no_increment: false,
            fetch: true,
            remote: "origin".to_string(),
            tag_patterns: vec![TagPattern::default().pattern],
        }
    }
}

impl Config {
    /// Tag patterns as typed values, falling back to the default when none are configured
    pub fn patterns(&self) -> Vec<TagPattern> {
        if self.tag_patterns.is_empty() {
            return vec![TagPattern::default()];
        }
        self.tag_patterns.iter().map(TagPattern::new).collect()
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `misterbump.toml` in current directory
/// 3. `.misterbump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or a custom path is missing
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match locate_config(config_path) {
        Some(path) => read_config(&path),
        None => {
            log::debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
        .filter(|path| path.exists())
}

fn read_config(path: &Path) -> Result<Config> {
    log::debug!("Loading configuration from {}", path.display());

    let contents = fs::read_to_string(path).map_err(|e| {
        BumpError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    toml::from_str(&contents)
        .map_err(|e| BumpError::config(format!("Cannot parse '{}': {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.style, SuffixStyle::ReleaseCandidate);
        assert_eq!(config.prefix, "");
        assert!(!config.no_increment);
        assert!(config.fetch);
        assert_eq!(config.remote, "origin");
        assert_eq!(config.tag_patterns, vec!["release-*".to_string()]);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("style = \".dev\"\nprefix = \"fred/\"\n").unwrap();
        assert_eq!(config.style, SuffixStyle::DevRelease);
        assert_eq!(config.prefix, "fred/");
        assert!(config.fetch);
        assert_eq!(config.remote, "origin");
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        assert!(toml::from_str::<Config>("style = \"beta\"\n").is_err());
    }

    #[test]
    fn test_empty_patterns_fall_back_to_default() {
        let config: Config = toml::from_str("tag_patterns = []\n").unwrap();
        assert_eq!(config.patterns(), vec![TagPattern::default()]);
    }
}
