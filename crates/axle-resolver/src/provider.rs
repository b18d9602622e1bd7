//! Named upstream sources of axis values.

use std::collections::BTreeMap;
use std::path::Path;

use axle_core::axis::AxisValue;
use axle_core::manifest::{Manifest, ProviderDecl};
use axle_core::properties;
use axle_util::errors::AxleError;

/// Values supplied by one provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderValues {
    /// Plugin the provider is bound to, when that plugin is not applied.
    pub missing_plugin: Option<String>,
    pub values: BTreeMap<String, AxisValue>,
}

/// Every provider a declaration can refer to, with its values loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderSet {
    providers: BTreeMap<String, ProviderValues>,
}

impl ProviderSet {
    /// Load all providers declared in `manifest`.
    ///
    /// `base_dir` is the directory `properties` paths are relative to,
    /// normally the one holding `Axle.toml`.
    pub fn load(manifest: &Manifest, base_dir: &Path) -> Result<Self, AxleError> {
        let mut providers = BTreeMap::new();
        for (name, decl) in &manifest.providers {
            let mut values = decl.values.clone();
            if let Some(ref file) = decl.properties {
                let path = base_dir.join(file);
                let props = properties::load_properties_file(&path).map_err(|e| {
                    AxleError::Provider {
                        message: format!("provider '{name}': {e}"),
                    }
                })?;
                overlay_properties(&mut values, decl, props);
            }
            let missing_plugin = decl
                .plugin
                .as_ref()
                .filter(|id| !manifest.has_plugin(id))
                .cloned();
            if let Some(ref plugin) = missing_plugin {
                tracing::debug!("provider '{name}' inactive: plugin '{plugin}' is not applied");
            }
            tracing::debug!("provider '{name}' supplies {} values", values.len());
            providers.insert(
                name.clone(),
                ProviderValues {
                    missing_plugin,
                    values,
                },
            );
        }
        Ok(Self { providers })
    }

    /// Build a provider set directly, bypassing the filesystem.
    pub fn from_values(providers: BTreeMap<String, BTreeMap<String, AxisValue>>) -> Self {
        Self {
            providers: providers
                .into_iter()
                .map(|(name, values)| {
                    (
                        name,
                        ProviderValues {
                            missing_plugin: None,
                            values,
                        },
                    )
                })
                .collect(),
        }
    }

    /// Look up `key` in `provider`, explaining why when nothing is found.
    pub fn lookup(&self, provider: &str, key: &str) -> Result<&AxisValue, String> {
        let values = self
            .providers
            .get(provider)
            .ok_or_else(|| format!("provider '{provider}' is not declared"))?;
        if let Some(ref plugin) = values.missing_plugin {
            return Err(format!(
                "provider '{provider}' requires plugin '{plugin}', which is not applied"
            ));
        }
        values
            .values
            .get(key)
            .ok_or_else(|| format!("provider '{provider}' has no value for '{key}'"))
    }
}

fn overlay_properties(
    values: &mut BTreeMap<String, AxisValue>,
    decl: &ProviderDecl,
    props: BTreeMap<String, String>,
) {
    for (key, raw) in props {
        let key = match decl.prefix.as_deref() {
            Some(prefix) => match key.strip_prefix(prefix) {
                Some(stripped) => stripped.to_string(),
                None => continue,
            },
            None => key,
        };
        values.insert(key, AxisValue::parse_typed(&raw));
    }
}
