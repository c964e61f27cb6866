//! Merge policy: builds the layered source chain and deserializes to
//! [`SiteConfig`]. Precedence: built-in defaults (lowest) -> file ->
//! environment (highest).

use crate::config::{sources, SiteConfig};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use std::path::Path;

/// Builder seeded with the built-in defaults.
pub(crate) fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = Config::builder()
        .set_default("name", "Example Site")?
        .set_default("base_url", "https://www.example.com")?
        .set_default("social_profiles", Vec::<String>::new())?
        .set_default("defaults.title", "Example Site")?
        .set_default("defaults.description", "")?
        .set_default("defaults.keywords", Vec::<String>::new())?
        .set_default("defaults.type", "website")?
        .set_default("defaults.noindex", false)?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("logging.color", true)?;
    Ok(builder)
}

/// Load config from the standard sources (optional local file + env).
pub(crate) fn load() -> Result<SiteConfig, ConfigError> {
    let builder = builder_with_defaults()?;
    let builder = sources::add_local_file(builder);
    let builder = sources::add_environment(builder);

    let config = builder.build()?;
    config.try_deserialize()
}

/// Load config from a specific file with environment overlay.
pub(crate) fn load_from_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let builder = builder_with_defaults()?;
    let builder = sources::add_file(builder, path);
    let builder = sources::add_environment(builder);

    let config = builder.build()?;
    config.try_deserialize()
}
