//! Checks applied to a declaration and its resolved variants.
//!
//! Plugin order, desugaring and signing problems are fatal. SDK ordering and
//! JVM target mismatches only produce [`Warning`]s.

use std::collections::BTreeMap;
use std::fmt;

use axle_core::axis::{names, AxisValue};
use axle_core::manifest::{PluginRef, SigningConfig};
use axle_util::errors::AxleError;

use crate::descriptor::{ResolvedSigning, ResolvedVariant};

/// A non-fatal finding about a resolved variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub variant: String,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.variant, self.message)
    }
}

/// Every plugin's `after` prerequisites must be applied earlier in the list.
pub fn check_plugin_order(plugins: &[PluginRef]) -> Result<(), AxleError> {
    for (position, plugin) in plugins.iter().enumerate() {
        for prerequisite in plugin.after() {
            let applied_before = plugins[..position].iter().any(|p| p.id() == prerequisite);
            if !applied_before {
                return Err(AxleError::PluginOrderViolation {
                    plugin: plugin.id().to_string(),
                    prerequisite: prerequisite.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Enabled desugaring needs a `coreLibraryDesugaring` dependency.
pub fn check_desugaring(variant: &ResolvedVariant) -> Result<(), AxleError> {
    let enabled = desugaring_enabled(variant);
    let has_library = variant.dependencies.iter().any(|d| d.scope.is_desugaring());
    if enabled && !has_library {
        return Err(AxleError::MissingDesugaringLibrary {
            variant: variant.name.clone(),
        });
    }
    Ok(())
}

/// Look up the signing config named by the variant's `signingConfig` axis.
pub fn resolve_signing(
    variant: &str,
    axes: &BTreeMap<String, AxisValue>,
    configs: &BTreeMap<String, SigningConfig>,
) -> Result<Option<ResolvedSigning>, AxleError> {
    let Some(value) = axes.get(names::SIGNING_CONFIG) else {
        return Ok(None);
    };
    let name = value.to_string();
    let config = configs
        .get(&name)
        .ok_or_else(|| AxleError::UnknownSigningConfig {
            variant: variant.to_string(),
            name: name.clone(),
        })?;
    Ok(Some(ResolvedSigning {
        name,
        config: config.clone(),
    }))
}

/// Consistency warnings for a resolved variant.
pub fn lint(variant: &ResolvedVariant) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let mut warn = |message: String| {
        warnings.push(Warning {
            variant: variant.name.clone(),
            message,
        })
    };

    let sdk = |axis: &str| variant.value(axis).and_then(AxisValue::as_i64);
    if let (Some(min), Some(target)) = (sdk(names::MIN_SDK), sdk(names::TARGET_SDK)) {
        if min > target {
            warn(format!("minSdk {min} is above targetSdk {target}"));
        }
    }
    if let (Some(target), Some(compile)) = (sdk(names::TARGET_SDK), sdk(names::COMPILE_SDK)) {
        if target > compile {
            warn(format!("targetSdk {target} is above compileSdk {compile}"));
        }
    }

    if let (Some(jvm), Some(java)) = (
        variant.value(names::JVM_TARGET),
        variant.value(names::TARGET_COMPATIBILITY),
    ) {
        if normalize_java_version(jvm) != normalize_java_version(java) {
            warn(format!(
                "jvmTarget {jvm} differs from targetCompatibility {java}"
            ));
        }
    }

    if let (Some(source), Some(target)) = (
        variant.value(names::SOURCE_COMPATIBILITY),
        variant.value(names::TARGET_COMPATIBILITY),
    ) {
        if normalize_java_version(source) != normalize_java_version(target) {
            warn(format!(
                "sourceCompatibility {source} differs from targetCompatibility {target}"
            ));
        }
    }

    let has_library = variant.dependencies.iter().any(|d| d.scope.is_desugaring());
    if has_library && !desugaring_enabled(variant) {
        warn("a coreLibraryDesugaring dependency is declared but desugaring is disabled".to_string());
    }

    warnings
}

fn desugaring_enabled(variant: &ResolvedVariant) -> bool {
    variant
        .value(names::DESUGARING_ENABLED)
        .and_then(AxisValue::as_bool)
        .unwrap_or(false)
}

/// `"1.8"`, `"8"`, `"VERSION_1_8"` and `17` compare equal to their peers.
fn normalize_java_version(value: &AxisValue) -> String {
    let raw = value.to_string();
    let raw = raw.strip_prefix("VERSION_").unwrap_or(&raw).replace('_', ".");
    raw.strip_prefix("1.").map(str::to_string).unwrap_or(raw)
}
