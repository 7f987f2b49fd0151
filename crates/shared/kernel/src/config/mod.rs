use config::{Config, Environment, File, Map};
use epyl_domain::config::SiteConfig;
use epyl_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Custom error type for config loading.
#[epyl_derive::epyl_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: an optional file, then `EPYL__`-prefixed environment
/// variables on top.
///
/// Nested keys use double underscores (`EPYL__SERVER__PORT` maps to `server.port`).
/// Keys missing from every layer fall back to the serde defaults of the target type.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    env: Option<Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads this file (format picked by extension). The file becomes required.
    ///
    /// Without it the loader looks for an optional `epyl.{toml,json,yaml}` in the
    /// working directory.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Replaces the process environment with a fixed map (keys like `EPYL__SITE__NAME`).
    #[must_use]
    pub fn env_source(mut self, vars: Map<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Builds the layers and deserializes them into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if an explicit file is missing or malformed, or if
    /// the merged values do not match the structure of `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let file = match &self.file {
            Some(path) => {
                info!("Loading config from {}", path.display());
                File::from(path.as_path()).required(true)
            },
            None => {
                debug!("No config file given, looking for optional `{DEFAULT_CONFIG_FILE}`");
                File::with_name(DEFAULT_CONFIG_FILE).required(false)
            },
        };

        let env = Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .convert_case(config::Case::Snake)
            .source(self.env);

        Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")
    }
}

/// Loads any deserializable configuration with the default layering.
///
/// # Errors
/// See [`ConfigLoader::load`].
pub fn load_config<T>(path: Option<&Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    path.map_or_else(ConfigLoader::new, |p| ConfigLoader::new().file(p)).load()
}

/// Loads the [`SiteConfig`] shared by the exporter and the preview server.
///
/// # Errors
/// See [`ConfigLoader::load`].
pub fn load_site_config(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    load_config(path)
}
