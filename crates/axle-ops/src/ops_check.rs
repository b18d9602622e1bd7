//! Operation: validate the declaration without printing the descriptor.
//!
//! Resolves every variant so that all fatal errors surface, then reports the
//! non-fatal consistency warnings.

use axle_resolver::resolver::{self, Resolver};
use axle_resolver::validate::Warning;
use axle_util::progress;

use crate::Project;

/// Outcome of a successful check.
#[derive(Debug)]
pub struct CheckReport {
    pub variants: usize,
    pub warnings: Vec<Warning>,
}

/// Check the project, printing Cargo-style status lines to stderr.
pub fn check(project: &Project, verbose: bool) -> miette::Result<CheckReport> {
    progress::status("Checking", &project.manifest.package.name);

    let resolver = Resolver::load(&project.manifest, project.root())?;
    let descriptor = resolver.resolve()?;

    if verbose {
        for variant in descriptor.variants.values() {
            progress::status_info(
                "Resolved",
                &format!(
                    "{} ({} axes, {} dependencies)",
                    variant.name,
                    variant.axes.len(),
                    variant.dependencies.len()
                ),
            );
        }
    }

    let warnings = resolver::warnings(&descriptor);
    for warning in &warnings {
        progress::status_warn("warning", &warning.to_string());
    }

    progress::status(
        "Finished",
        &format!(
            "{} variants, {} warnings",
            descriptor.variants.len(),
            warnings.len()
        ),
    );
    Ok(CheckReport {
        variants: descriptor.variants.len(),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project(toml: &str) -> (TempDir, Project) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Axle.toml");
        std::fs::write(&path, toml).unwrap();
        let project = Project::load(&path).unwrap();
        (tmp, project)
    }

    #[test]
    fn reports_warnings_per_variant() {
        let (_tmp, project) = project(
            r#"
[package]
name = "demo"

[axes]
minSdk = 21
targetSdk = 34
compileSdk = 33
"#,
        );
        let report = check(&project, false).unwrap();
        assert_eq!(report.variants, 2);
        assert_eq!(report.warnings.len(), 2);
        assert!(report
            .warnings
            .iter()
            .all(|w| w.message == "targetSdk 34 is above compileSdk 33"));
    }

    #[test]
    fn fatal_errors_propagate() {
        let (_tmp, project) = project(
            r#"
[package]
name = "demo"

[variants.debug]
base = "debug"
"#,
        );
        let err = check(&project, true).unwrap_err();
        assert!(err.to_string().contains("Cyclic variant inheritance"), "got: {err}");
    }
}
