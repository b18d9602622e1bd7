//! Dependency declaration merging.
//!
//! A variant sees the top-level `[dependencies]` plus the dependencies of
//! every variant in its chain. Declarations of the same `group:artifact` are
//! merged by scope; the result does not depend on declaration order.

use std::collections::BTreeMap;

use axle_core::dependency::{Coordinate, DependencyDecls, DependencyScope};
use axle_core::variant::VariantDecl;
use axle_util::errors::AxleError;

use crate::descriptor::ResolvedDependency;

/// Parse one `scope = ["g:a:v", ...]` table into flat declarations.
pub fn parse_decls(decls: &DependencyDecls) -> Result<Vec<ResolvedDependency>, AxleError> {
    let mut parsed = Vec::new();
    for (scope_name, coordinates) in decls {
        let scope: DependencyScope = scope_name
            .parse()
            .map_err(|message| AxleError::Manifest { message })?;
        for raw in coordinates {
            let coordinate = Coordinate::parse(raw).ok_or_else(|| AxleError::InvalidCoordinate {
                coordinate: raw.clone(),
            })?;
            parsed.push(ResolvedDependency { scope, coordinate });
        }
    }
    Ok(parsed)
}

/// Merge the dependencies visible to a variant with the given chain.
pub fn resolve_dependencies(
    chain: &[String],
    common: &DependencyDecls,
    variants: &BTreeMap<String, VariantDecl>,
) -> Result<Vec<ResolvedDependency>, AxleError> {
    let mut all = parse_decls(common)?;
    for name in chain {
        if let Some(decl) = variants.get(name) {
            all.extend(parse_decls(&decl.dependencies)?);
        }
    }
    merge(all)
}

/// Merge declarations per coordinate.
///
/// Identical declarations collapse, `api` absorbs `implementation`, and any
/// other scope or version disagreement is an error.
pub fn merge(mut declarations: Vec<ResolvedDependency>) -> Result<Vec<ResolvedDependency>, AxleError> {
    declarations.sort();
    declarations.dedup();

    let mut by_key: BTreeMap<String, ResolvedDependency> = BTreeMap::new();
    for dep in declarations {
        let key = dep.coordinate.key();
        let Some(existing) = by_key.get_mut(&key) else {
            by_key.insert(key, dep);
            continue;
        };

        let scope = existing
            .scope
            .merge(dep.scope)
            .ok_or_else(|| AxleError::ConflictingDependencyScope {
                coordinate: key.clone(),
                first: existing.scope.to_string(),
                second: dep.scope.to_string(),
            })?;
        if existing.coordinate.version != dep.coordinate.version {
            return Err(AxleError::ConflictingDependencyVersion {
                coordinate: key,
                scope: scope.to_string(),
                first: existing.coordinate.version.clone(),
                second: dep.coordinate.version,
            });
        }
        if scope != existing.scope {
            tracing::debug!("{key}: '{}' merged into '{scope}'", existing.scope);
        }
        existing.scope = scope;
    }

    let mut merged: Vec<ResolvedDependency> = by_key.into_values().collect();
    merged.sort();
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls(entries: &[(&str, &[&str])]) -> DependencyDecls {
        entries
            .iter()
            .map(|(scope, coords)| {
                (
                    scope.to_string(),
                    coords.iter().map(|c| c.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn conflicting_scopes_fail() {
        let common = decls(&[
            ("implementation", &["com.android.tools:desugar_jdk_libs:2.0.4"]),
            ("coreLibraryDesugaring", &["com.android.tools:desugar_jdk_libs:2.0.4"]),
        ]);
        let err = resolve_dependencies(&[], &common, &BTreeMap::new()).unwrap_err();
        match err {
            AxleError::ConflictingDependencyScope {
                coordinate,
                first,
                second,
            } => {
                assert_eq!(coordinate, "com.android.tools:desugar_jdk_libs");
                assert_eq!(first, "implementation");
                assert_eq!(second, "coreLibraryDesugaring");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn api_absorbs_implementation() {
        let common = decls(&[
            ("implementation", &["androidx.core:core-ktx:1.13.1"]),
            ("api", &["androidx.core:core-ktx:1.13.1"]),
        ]);
        let merged = resolve_dependencies(&[], &common, &BTreeMap::new()).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].scope, DependencyScope::Api);
    }

    #[test]
    fn version_disagreement_fails() {
        let common = decls(&[(
            "implementation",
            &["androidx.core:core-ktx:1.13.1", "androidx.core:core-ktx:1.12.0"],
        )]);
        let err = resolve_dependencies(&[], &common, &BTreeMap::new()).unwrap_err();
        assert!(
            matches!(err, AxleError::ConflictingDependencyVersion { .. }),
            "got: {err}"
        );
    }

    #[test]
    fn unknown_scope_and_bad_coordinate() {
        let err = parse_decls(&decls(&[("desugar", &["a:b:1"])])).unwrap_err();
        assert!(matches!(err, AxleError::Manifest { .. }), "got: {err}");

        let err = parse_decls(&decls(&[("implementation", &["a:b"])])).unwrap_err();
        assert!(matches!(err, AxleError::InvalidCoordinate { .. }), "got: {err}");
    }

    #[test]
    fn order_does_not_matter() {
        let a = ResolvedDependency {
            scope: DependencyScope::Implementation,
            coordinate: Coordinate::parse("org.jetbrains.kotlin:kotlin-stdlib:2.0.0").unwrap(),
        };
        let b = ResolvedDependency {
            scope: DependencyScope::Api,
            coordinate: Coordinate::parse("org.jetbrains.kotlin:kotlin-stdlib:2.0.0").unwrap(),
        };
        let c = ResolvedDependency {
            scope: DependencyScope::CoreLibraryDesugaring,
            coordinate: Coordinate::parse("com.android.tools:desugar_jdk_libs:2.0.4").unwrap(),
        };
        let forward = merge(vec![a.clone(), b.clone(), c.clone()]).unwrap();
        let backward = merge(vec![c, b, a]).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn variant_dependencies_are_inherited() {
        let mut variants = BTreeMap::new();
        variants.insert(
            "debug".to_string(),
            VariantDecl {
                dependencies: decls(&[(
                    "implementation",
                    &["com.squareup.leakcanary:leakcanary-android:2.14"],
                )]),
                ..VariantDecl::default()
            },
        );
        variants.insert("release".to_string(), VariantDecl::inheriting("debug"));
        let chain = vec!["release".to_string(), "debug".to_string()];
        let merged = resolve_dependencies(&chain, &DependencyDecls::new(), &variants).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].coordinate.artifact, "leakcanary-android");
    }
}
