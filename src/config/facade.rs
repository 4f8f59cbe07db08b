//! ConfigLoader facade over the layered sources.

use super::paths::global_config_path;
use super::sources;
use super::ShellConfig;
use config::ConfigError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    ///
    /// Precedence: defaults (lowest) -> global file -> environment (highest).
    pub fn load() -> Result<ShellConfig, ConfigError> {
        Self::load_layers(global_config_path(), false, true)
    }

    /// Load configuration from a specific file with environment overlay.
    ///
    /// The explicit file replaces the global file; it must exist.
    pub fn load_from_file(path: &Path) -> Result<ShellConfig, ConfigError> {
        Self::load_layers(Some(path.to_path_buf()), true, true)
    }

    pub(crate) fn load_layers(
        file: Option<PathBuf>,
        file_required: bool,
        with_environment: bool,
    ) -> Result<ShellConfig, ConfigError> {
        let mut builder = sources::builder_with_defaults()?;
        if let Some(path) = file {
            debug!(path = %path.display(), required = file_required, "Adding config file source");
            builder = sources::add_file(builder, &path, file_required)?;
        }
        if with_environment {
            builder = sources::add_environment(builder)?;
        }
        builder.build()?.try_deserialize()
    }
}
