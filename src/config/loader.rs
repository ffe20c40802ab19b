//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. `--config <FILE>`, or `.arith.toml` in the working directory
//! 4. `~/.config/arith/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;
use crate::logging;
use crate::models::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// Output rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            color: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// A `tracing_subscriber::EnvFilter` directive, e.g. `"debug"`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: constants::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// An explicit `config_file` replaces the working-directory lookup and
    /// must exist. The global file and `.arith.toml` are optional.
    pub fn load(
        config_file: Option<&Path>,
        working_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config.merge(Self::load_file(&global_path)?);
            }
        }

        match (config_file, working_dir) {
            (Some(path), _) => config.merge(Self::load_file(path)?),
            (None, Some(dir)) => {
                let local_path = dir.join(constants::CONFIG_FILENAME);
                if local_path.exists() {
                    config.merge(Self::load_file(&local_path)?);
                }
            }
            (None, None) => {}
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other wins for non-default values).
    fn merge(&mut self, other: Config) {
        let default_output = OutputConfig::default();
        if other.output.format != default_output.format {
            self.output.format = other.output.format;
        }
        // Disabling color overrides enabling it.
        if !other.output.color {
            self.output.color = false;
        }

        if other.log.level != LogConfig::default().level {
            self.log.level = other.log.level;
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Runs before logging is set up, so invalid values are reported
    /// directly on stderr.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(constants::ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(_) => eprintln!("Warning: ignoring invalid {} value: {val}", constants::ENV_FORMAT),
            }
        }

        if let Some(val) = env.var(constants::ENV_LOG).ok().filter(|v| !v.trim().is_empty()) {
            if logging::build_filter(&val).is_ok() {
                self.log.level = val;
            } else {
                eprintln!("Warning: ignoring invalid {} value: {val}", constants::ENV_LOG);
            }
        }

        match env.flag(constants::ENV_NO_COLOR) {
            Some(Ok(no_color)) => self.output.color = !no_color,
            Some(Err(val)) => {
                eprintln!("Warning: ignoring invalid {} value: {val}", constants::ENV_NO_COLOR);
            }
            None => {}
        }
    }
}
