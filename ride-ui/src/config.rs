//! Application configuration loaded from an optional TOML file.
//!
//! Every section and field has a default, so an empty file (or no file)
//! yields a working configuration.
//!
//! ```toml
//! [window]
//! width = 900.0
//! height = 800.0
//!
//! [logging]
//! level = "info"
//! file = "ride.log"
//! stdout = true
//!
//! [profile]
//! name = "John Doe"
//! email = "john@example.com"
//!
//! [estimate]
//! min_minutes = 10
//! max_minutes = 40
//! min_cost = "10.00"
//! max_cost = "30.00"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use ride_core::{
    UserProfile,
    estimator::{EstimateConfig, EstimateConfigError},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid estimate settings: {0}")]
    Estimate(#[from] EstimateConfigError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub profile: UserProfile,
    pub estimate: EstimateConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: String,
    /// Append log records to this file as well.
    pub file: Option<PathBuf>,
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info,ride_ui=debug,ride_core=debug".to_string(),
            file: None,
            stdout: true,
        }
    }
}

impl AppConfig {
    /// Reads and validates the config at `path`, or returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.estimate.validate()?;
        Ok(config)
    }
}
