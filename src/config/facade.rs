//! ConfigLoader facade delegating to the merge policy.

use super::{merge, SiteConfig};
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the standard sources: built-in defaults,
    /// an optional `headsync.toml` in the working directory, and the
    /// environment.
    pub fn load() -> Result<SiteConfig, ConfigError> {
        merge::load()
    }

    /// Load configuration from a specific file, with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<SiteConfig, ConfigError> {
        merge::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> SiteConfig {
        SiteConfig::default()
    }

    /// Default configuration serialized as TOML, for seeding a new site.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&SiteConfig::default())
    }
}
