use std::fs::read_to_string as read_file;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::DEFAULT_RULESET_INTERVAL;

/// Relative path prefix of rule lists shipped in the ACL4SSR repository
pub const ACL4SSR_PREFIX: &str = "rules/ACL4SSR/";
/// CDN mirror that ACL4SSR relative paths are rewritten onto
pub const ACL4SSR_BASE_URL: &str = "https://testingcf.jsdelivr.net/gh/ACL4SSR/ACL4SSR@master/";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings controlling how rule specs are normalized
///
/// Every key is optional in a settings file; missing keys keep the values
/// that ACL4SSR configurations expect.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Interval given to rulesets without a trailing numeric suffix
    pub default_interval: u32,
    /// Relative path prefix that gets rewritten onto `acl4ssr_base_url`
    pub acl4ssr_prefix: String,
    /// Base URL replacing `acl4ssr_prefix`, including the trailing slash
    pub acl4ssr_base_url: String,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            default_interval: DEFAULT_RULESET_INTERVAL,
            acl4ssr_prefix: ACL4SSR_PREFIX.to_string(),
            acl4ssr_base_url: ACL4SSR_BASE_URL.to_string(),
        }
    }
}

impl ParserSettings {
    /// Load settings from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = read_file(path.as_ref())?;
        log::debug!("Loaded parser settings from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }
}
