//! Site Configuration
//!
//! Site-wide identity (name, base URL, logo, social profiles, search
//! template) plus the process-wide metadata defaults the resolver starts
//! from. Loaded with layered precedence: built-in defaults, then an
//! optional TOML file, then `HEADSYNC__*` environment variables.

pub mod facade;
pub(crate) mod merge;
pub(crate) mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::metadata::MetadataRecord;
use serde::{Deserialize, Serialize};

/// Site identity and process-wide defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name, used for `og:site_name` and the Organization block.
    pub name: String,
    /// Absolute origin used to absolutize canonical and image paths,
    /// e.g. `https://www.example.com`.
    pub base_url: String,
    /// Organization logo, absolute URL or site-relative path.
    pub logo: Option<String>,
    /// Social profile URLs emitted as the Organization `sameAs` list.
    pub social_profiles: Vec<String>,
    /// Search URL template with a `{search_term_string}` placeholder,
    /// e.g. `https://www.example.com/cerca?q={search_term_string}`.
    /// When absent the WebSite block declares no search action.
    pub search_template: Option<String>,
    /// Process-wide default metadata record (lowest precedence tier).
    pub defaults: MetadataRecord,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Example Site".to_string(),
            base_url: "https://www.example.com".to_string(),
            logo: None,
            social_profiles: Vec::new(),
            search_template: None,
            defaults: MetadataRecord {
                title: "Example Site".to_string(),
                ..Default::default()
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Absolutize a URL against the configured base. Already-absolute URLs
    /// pass through unchanged.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}
