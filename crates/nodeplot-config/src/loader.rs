//! Configuration loading utilities

use crate::defaults::DEFAULT_CONFIG_FILES;
use crate::schema::Config;
use nodeplot_common::{NodePlotError, Result as NodePlotResult};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "NODEPLOT_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file {}: {source}", path.display())]
    IoError {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[source] NodePlotError),
}

impl From<ConfigError> for NodePlotError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationError(inner) => inner,
            other => Self::config_with_source(other.to_string(), other),
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML or TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let mut config = Self::parse_file(path.as_ref())?;

        Self::apply_env_overrides(&mut config)?;
        config.validate().map_err(ConfigError::ValidationError)?;

        Ok(config)
    }

    /// Load configuration from `explicit`, the environment, a default file, or defaults
    pub fn load(explicit: Option<&Path>) -> NodePlotResult<Config> {
        let config = match Self::config_path(explicit) {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::load_config(&path)?
            }
            None => {
                debug!("No configuration file found, using defaults");
                let mut config = Config::default();
                Self::apply_env_overrides(&mut config)?;
                config.validate()?;
                config
            }
        };

        Ok(config)
    }

    /// The file [`load`](Self::load) reads for `explicit`, if any
    pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        Self::locate(explicit, env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
    }

    /// Picks the file to load: explicit path, then env path, then the first
    /// default name that exists in the working directory.
    pub fn locate(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Option<PathBuf> {
        explicit.map(Path::to_path_buf).or(from_env).or_else(|| {
            DEFAULT_CONFIG_FILES
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
        })
    }

    /// Parse a configuration file without overrides or validation
    pub fn parse_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Ok(toml::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }

    /// Apply process environment overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides read through `lookup`
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("NODEPLOT_DATA_DIR") {
            config.data.directory = PathBuf::from(dir);
        }

        if let Some(limit) = lookup("NODEPLOT_AREA_LIMIT") {
            config.plot.area_limit =
                limit
                    .trim()
                    .replace(',', ".")
                    .parse()
                    .map_err(|e| ConfigError::EnvParseError {
                        var: "NODEPLOT_AREA_LIMIT".to_string(),
                        source: Box::new(e),
                    })?;
        }

        if let Some(viewer) = lookup("NODEPLOT_VIEWER") {
            config.display.viewer = Some(viewer);
        }

        if let Some(level) = lookup("NODEPLOT_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}
