//! Per-variant axis resolution.
//!
//! The effective declaration of an axis is the one nearest to the variant:
//! the variant's own override, then each base in turn, then `[axes]`. That
//! declaration is then settled: a literal is used as-is, a deferred axis is
//! looked up in its provider, and anything else is `MissingAxisValue`.

use std::collections::BTreeMap;

use axle_core::axis::{AxisSource, AxisValue};
use axle_core::variant::VariantDecl;
use axle_util::errors::AxleError;

use crate::descriptor::{AxisOrigin, DEFAULT_AXES};
use crate::provider::ProviderSet;

/// Axis values of one variant, with where each came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedAxes {
    pub values: BTreeMap<String, AxisValue>,
    pub origins: BTreeMap<String, AxisOrigin>,
}

/// Pick the nearest declaration of every axis visible to a variant.
///
/// `chain` is nearest first, as returned by
/// [`VariantGraph::chain`](crate::graph::VariantGraph::chain).
pub fn effective_declarations<'a>(
    chain: &[String],
    defaults: &'a BTreeMap<String, AxisSource>,
    variants: &'a BTreeMap<String, VariantDecl>,
) -> BTreeMap<&'a str, (&'a AxisSource, &'a str)> {
    let mut effective: BTreeMap<&str, (&AxisSource, &str)> = defaults
        .iter()
        .map(|(axis, source)| (axis.as_str(), (source, DEFAULT_AXES)))
        .collect();

    for name in chain.iter().rev() {
        let Some((name, decl)) = variants.get_key_value(name) else {
            continue;
        };
        for (axis, source) in &decl.overrides {
            effective.insert(axis.as_str(), (source, name.as_str()));
        }
    }
    effective
}

/// Resolve every axis of `variant`.
pub fn resolve_axes(
    variant: &str,
    chain: &[String],
    defaults: &BTreeMap<String, AxisSource>,
    variants: &BTreeMap<String, VariantDecl>,
    providers: &ProviderSet,
) -> Result<ResolvedAxes, AxleError> {
    let mut resolved = ResolvedAxes::default();
    for (axis, (source, declared_in)) in effective_declarations(chain, defaults, variants) {
        let (value, origin) = resolve_source(variant, axis, source, declared_in, providers)?;
        tracing::debug!("{variant}.{axis} = {value} ({origin})");
        resolved.values.insert(axis.to_string(), value);
        resolved.origins.insert(axis.to_string(), origin);
    }
    Ok(resolved)
}

/// Settle a single declaration: literal, then provider, else fail.
pub fn resolve_source(
    variant: &str,
    axis: &str,
    source: &AxisSource,
    declared_in: &str,
    providers: &ProviderSet,
) -> Result<(AxisValue, AxisOrigin), AxleError> {
    let missing = |reason: String| AxleError::MissingAxisValue {
        axis: axis.to_string(),
        variant: variant.to_string(),
        reason,
    };

    match source {
        AxisSource::Literal(value) => Ok((
            value.clone(),
            AxisOrigin::Literal {
                declared_in: declared_in.to_string(),
            },
        )),
        AxisSource::Deferred(deferred) => {
            let Some(ref provider) = deferred.provider else {
                return Err(missing(format!(
                    "declared in {declared_in} without a literal value or provider"
                )));
            };
            let key = deferred.key.as_deref().unwrap_or(axis);
            let value = providers.lookup(provider, key).map_err(missing)?;
            Ok((
                value.clone(),
                AxisOrigin::Provider {
                    declared_in: declared_in.to_string(),
                    provider: provider.clone(),
                    key: key.to_string(),
                },
            ))
        }
    }
}
