//! The resolved build descriptor handed to the packaging tool.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use axle_core::axis::AxisValue;
use axle_core::config::OutputFormat;
use axle_core::dependency::{Coordinate, DependencyScope};
use axle_core::manifest::SigningConfig;
use axle_util::errors::AxleError;

/// Label used as the origin of axes declared in the top-level `[axes]` table.
pub const DEFAULT_AXES: &str = "[axes]";

/// Fully resolved declaration: every variant with all of its axes settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDescriptor {
    pub package: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Applied plugins, in application order.
    pub plugins: Vec<String>,
    pub variants: BTreeMap<String, ResolvedVariant>,
}

/// One variant after inheritance and provider lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedVariant {
    pub name: String,
    /// Inheritance chain, nearest first, starting with this variant.
    pub chain: Vec<String>,
    pub axes: BTreeMap<String, AxisValue>,
    #[serde(skip)]
    pub origins: BTreeMap<String, AxisOrigin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing: Option<ResolvedSigning>,
    pub dependencies: Vec<ResolvedDependency>,
}

impl ResolvedVariant {
    pub fn value(&self, axis: &str) -> Option<&AxisValue> {
        self.axes.get(axis)
    }

    /// Dependencies declared in `scope`.
    pub fn dependencies_in(
        &self,
        scope: DependencyScope,
    ) -> impl Iterator<Item = &ResolvedDependency> {
        self.dependencies.iter().filter(move |d| d.scope == scope)
    }

    /// Serialize a single variant for the packaging tool.
    pub fn render(&self, format: OutputFormat) -> Result<String, AxleError> {
        render(self, format)
    }
}

/// Where a resolved axis value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AxisOrigin {
    Literal {
        declared_in: String,
    },
    Provider {
        declared_in: String,
        provider: String,
        key: String,
    },
}

impl fmt::Display for AxisOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { declared_in } => write!(f, "literal in {declared_in}"),
            Self::Provider {
                declared_in,
                provider,
                key,
            } => write!(f, "{provider}.{key} via {declared_in}"),
        }
    }
}

/// A merged dependency of a variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResolvedDependency {
    pub scope: DependencyScope,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl fmt::Display for ResolvedDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.coordinate, self.scope)
    }
}

/// The signing config a variant's `signingConfig` axis points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSigning {
    pub name: String,
    #[serde(flatten)]
    pub config: SigningConfig,
}

impl ResolvedDescriptor {
    pub fn variant(&self, name: &str) -> Option<&ResolvedVariant> {
        self.variants.get(name)
    }

    /// Serialize the descriptor for the packaging tool.
    pub fn render(&self, format: OutputFormat) -> Result<String, AxleError> {
        render(self, format)
    }
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, AxleError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        OutputFormat::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
    };
    rendered.map_err(|e| AxleError::Generic {
        message: format!("Failed to serialize descriptor as {format}: {e}"),
    })
}
