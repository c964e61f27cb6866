//! Configuration sources: site config files and HEADSYNC__* environment
//! variables with __ separator for nested keys.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use std::path::Path;

/// Add a required file source.
pub(crate) fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path.to_path_buf()))
}

/// Add the optional `headsync.toml` from the working directory.
pub(crate) fn add_local_file(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::with_name("headsync").required(false))
}

/// Add the environment variable overlay.
/// The `config` crate derives the prefix separator from the key
/// separator, so variables take a double-underscore form throughout:
/// `HEADSYNC__NAME`, `HEADSYNC__DEFAULTS__TITLE`. Single-underscore
/// variables like `HEADSYNC_NAME` are ignored.
pub(crate) fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("HEADSYNC")
            .separator("__")
            .try_parsing(true),
    )
}
