//! Config sources: built-in defaults, TOML files, and `BATCHSH__*` environment overlay.

use super::ShellConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use std::path::Path;

pub const ENV_PREFIX: &str = "BATCHSH";
pub const ENV_SEPARATOR: &str = "__";

/// Start a builder seeded with [`ShellConfig::default`].
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&ShellConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}

/// Add a TOML file. Missing optional files are skipped.
pub fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let source = File::from(path)
        .format(FileFormat::Toml)
        .required(required);
    Ok(builder.add_source(source))
}

/// Add environment variable overlay.
/// Uses BATCHSH prefix and __ as separator, e.g. `BATCHSH__LOGGING__LEVEL`.
pub fn add_environment(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    ))
}
