use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::axis::AxisSource;
use crate::dependency::DependencyDecls;

/// Name of the built-in debug variant.
pub const DEBUG: &str = "debug";

/// Name of the built-in release variant.
pub const RELEASE: &str = "release";

/// A build variant declaration from `[variants.<name>]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantDecl {
    /// Variant to inherit unset axes and dependencies from.
    #[serde(default)]
    pub base: Option<String>,

    #[serde(default)]
    pub overrides: BTreeMap<String, AxisSource>,

    #[serde(default)]
    pub dependencies: DependencyDecls,
}

impl VariantDecl {
    /// A variant that inherits everything from `base`.
    pub fn inheriting(base: &str) -> Self {
        Self {
            base: Some(base.to_string()),
            ..Self::default()
        }
    }

    /// Builder-style axis override, mostly for tests and programmatic declarations.
    pub fn with_override(mut self, axis: &str, source: AxisSource) -> Self {
        self.overrides.insert(axis.to_string(), source);
        self
    }
}
