use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use axle_util::errors::AxleError;

/// Global user configuration loaded from `~/.axle/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub resolve: ResolveConfig,
}

/// Resolution defaults from `[resolve]` in global config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Variant resolved when no `--variant` is given; all variants otherwise.
    #[serde(default, rename = "default-variant")]
    pub default_variant: Option<String>,

    #[serde(default)]
    pub format: OutputFormat,
}

/// Serialization format of the resolved descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

impl FromStr for OutputFormat {
    type Err = AxleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(AxleError::Generic {
                message: format!("Unknown output format '{other}' (expected json or toml)"),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Toml => f.write_str("toml"),
        }
    }
}

impl GlobalConfig {
    /// Load the global configuration from `~/.axle/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> Result<Self, AxleError> {
        let path = Self::default_path();
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = axle_util::fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, AxleError> {
        toml::from_str(content).map_err(|e| AxleError::Generic {
            message: format!("Failed to parse global config: {e}"),
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the Axle data directory (`~/.axle/`).
pub fn dirs_path() -> PathBuf {
    axle_util::fs::home_dir().join(".axle")
}
