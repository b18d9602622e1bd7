use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use axle_util::errors::AxleError;

use crate::axis::{AxisSource, AxisValue};
use crate::dependency::DependencyDecls;
use crate::variant::{VariantDecl, DEBUG, RELEASE};

/// The parsed representation of an `Axle.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub package: PackageMetadata,

    /// Plugins in application order.
    #[serde(default)]
    pub plugins: Vec<PluginRef>,

    #[serde(default)]
    pub providers: BTreeMap<String, ProviderDecl>,

    /// Default axis declarations shared by every variant.
    #[serde(default)]
    pub axes: BTreeMap<String, AxisSource>,

    #[serde(default)]
    pub variants: BTreeMap<String, VariantDecl>,

    #[serde(default)]
    pub dependencies: DependencyDecls,

    #[serde(default)]
    pub signing: BTreeMap<String, SigningConfig>,
}

/// Package identity from the `[package]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A plugin reference, either a simple ID string or a detailed specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginRef {
    Id(String),
    Detailed {
        id: String,
        /// Plugins that must be applied before this one.
        #[serde(default)]
        after: Vec<String>,
    },
}

impl PluginRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) | Self::Detailed { id, .. } => id,
        }
    }

    pub fn after(&self) -> &[String] {
        match self {
            Self::Id(_) => &[],
            Self::Detailed { after, .. } => after,
        }
    }
}

/// A named source of axis values from `[providers.<name>]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderDecl {
    /// Plugin that supplies this provider; without it the provider is inactive.
    #[serde(default)]
    pub plugin: Option<String>,

    /// `.properties` file, relative to the manifest, whose entries override `values`.
    #[serde(default)]
    pub properties: Option<String>,

    /// Prefix stripped from properties keys (e.g. `flutter.`).
    #[serde(default)]
    pub prefix: Option<String>,

    #[serde(default)]
    pub values: BTreeMap<String, AxisValue>,
}

/// Signing identity from `[signing.<name>]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningConfig {
    #[serde(default)]
    pub keystore: Option<String>,
    #[serde(default, rename = "key-alias")]
    pub key_alias: Option<String>,
    #[serde(default, rename = "store-password", skip_serializing)]
    pub store_password: Option<String>,
    #[serde(default, rename = "key-password", skip_serializing)]
    pub key_password: Option<String>,
}

impl SigningConfig {
    /// The Android SDK's well-known debug keystore.
    pub fn android_debug() -> Self {
        Self {
            keystore: Some("~/.android/debug.keystore".to_string()),
            key_alias: Some("androiddebugkey".to_string()),
            store_password: Some("android".to_string()),
            key_password: Some("android".to_string()),
        }
    }
}

impl Manifest {
    /// Load and parse an `Axle.toml` file from the given path.
    ///
    /// Before parsing, `${env:VAR}` references in the manifest content are
    /// resolved using `.axle.env` (if present alongside `Axle.toml`) and
    /// process environment variables.
    pub fn from_path(path: &Path) -> Result<Self, AxleError> {
        let content = std::fs::read_to_string(path).map_err(|e| AxleError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        let dir = path.parent().unwrap_or(Path::new("."));
        let env_vars =
            crate::properties::load_env_file(&dir.join(crate::ENV_FILE)).unwrap_or_default();
        let resolved = crate::properties::interpolate(&content, &env_vars);
        tracing::debug!(
            "loaded {} ({} .axle.env entries)",
            path.display(),
            env_vars.len()
        );

        Self::parse(&resolved)
    }

    /// Parse an `Axle.toml` from a string (no interpolation).
    pub fn parse(content: &str) -> Result<Self, AxleError> {
        toml::from_str(content).map_err(|e| AxleError::Manifest {
            message: format!("Failed to parse Axle.toml: {e}"),
        })
    }

    /// Declared variants plus the built-in `debug` and `release` when absent.
    pub fn variant_decls(&self) -> BTreeMap<String, VariantDecl> {
        let mut variants = self.variants.clone();
        for builtin in [DEBUG, RELEASE] {
            variants.entry(builtin.to_string()).or_default();
        }
        variants
    }

    /// Declared signing configs plus the implicit Android `debug` one.
    pub fn signing_configs(&self) -> BTreeMap<String, SigningConfig> {
        let mut configs = self.signing.clone();
        configs
            .entry(DEBUG.to_string())
            .or_insert_with(SigningConfig::android_debug);
        configs
    }

    /// Whether a plugin with the given id is applied.
    pub fn has_plugin(&self, id: &str) -> bool {
        self.plugins.iter().any(|p| p.id() == id)
    }
}
