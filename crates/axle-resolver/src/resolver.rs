//! The configuration resolver.

use std::collections::BTreeMap;
use std::path::Path;

use axle_core::manifest::{Manifest, SigningConfig};
use axle_core::variant::VariantDecl;
use axle_util::errors::AxleError;

use crate::axes;
use crate::dependencies;
use crate::descriptor::{ResolvedDescriptor, ResolvedVariant};
use crate::graph::VariantGraph;
use crate::provider::ProviderSet;
use crate::validate::{self, Warning};

/// Resolves a validated declaration, one variant or all of them.
///
/// Construction checks everything that does not depend on a particular
/// variant (plugin order, unknown bases, inheritance cycles). Resolving is
/// then a pure function of the declaration and the provider values.
pub struct Resolver<'a> {
    manifest: &'a Manifest,
    providers: ProviderSet,
    variants: BTreeMap<String, VariantDecl>,
    signing: BTreeMap<String, SigningConfig>,
    graph: VariantGraph,
}

impl<'a> Resolver<'a> {
    pub fn new(manifest: &'a Manifest, providers: ProviderSet) -> Result<Self, AxleError> {
        validate::check_plugin_order(&manifest.plugins)?;
        let variants = manifest.variant_decls();
        let graph = VariantGraph::build(&variants)?;
        Ok(Self {
            manifest,
            providers,
            signing: manifest.signing_configs(),
            variants,
            graph,
        })
    }

    /// Load provider values relative to `manifest_dir` and build a resolver.
    pub fn load(manifest: &'a Manifest, manifest_dir: &Path) -> Result<Self, AxleError> {
        let providers = ProviderSet::load(manifest, manifest_dir)?;
        Self::new(manifest, providers)
    }

    pub fn graph(&self) -> &VariantGraph {
        &self.graph
    }

    /// The inheritance chain of a variant, nearest first.
    pub fn variant_chain(&self, name: &str) -> Result<Vec<String>, AxleError> {
        self.graph.chain(name)
    }

    /// Resolve a single variant.
    pub fn resolve_variant(&self, name: &str) -> Result<ResolvedVariant, AxleError> {
        let chain = self.graph.chain(name)?;
        tracing::debug!("resolving variant {}", chain.join(" -> "));

        let resolved = axes::resolve_axes(
            name,
            &chain,
            &self.manifest.axes,
            &self.variants,
            &self.providers,
        )?;
        let dependencies =
            dependencies::resolve_dependencies(&chain, &self.manifest.dependencies, &self.variants)?;
        let signing = validate::resolve_signing(name, &resolved.values, &self.signing)?;

        let variant = ResolvedVariant {
            name: name.to_string(),
            chain,
            axes: resolved.values,
            origins: resolved.origins,
            signing,
            dependencies,
        };
        validate::check_desugaring(&variant)?;
        Ok(variant)
    }

    /// Resolve every variant into a complete descriptor.
    pub fn resolve(&self) -> Result<ResolvedDescriptor, AxleError> {
        let mut variants = BTreeMap::new();
        for name in self.graph.names() {
            variants.insert(name.to_string(), self.resolve_variant(name)?);
        }
        Ok(ResolvedDescriptor {
            package: self.manifest.package.name.clone(),
            namespace: self.manifest.package.namespace.clone(),
            plugins: self
                .manifest
                .plugins
                .iter()
                .map(|p| p.id().to_string())
                .collect(),
            variants,
        })
    }
}

/// Resolve every variant of `manifest` against `providers`.
pub fn resolve(manifest: &Manifest, providers: ProviderSet) -> Result<ResolvedDescriptor, AxleError> {
    Resolver::new(manifest, providers)?.resolve()
}

/// Consistency warnings for every variant of a descriptor.
///
/// Resolution never reports these itself; callers decide how to show them.
pub fn warnings(descriptor: &ResolvedDescriptor) -> Vec<Warning> {
    descriptor
        .variants
        .values()
        .flat_map(validate::lint)
        .collect()
}
