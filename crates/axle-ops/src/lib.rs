pub mod ops_check;
pub mod ops_deps;
pub mod ops_resolve;
pub mod ops_variants;

use std::path::{Path, PathBuf};

use axle_core::manifest::Manifest;
use axle_core::MANIFEST_FILE;
use axle_util::errors::AxleError;
use axle_util::fs::find_ancestor_with;

/// A loaded declaration and the directory provider files are relative to.
pub struct Project {
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
}

impl Project {
    /// Load the manifest at `path`.
    pub fn load(path: &Path) -> miette::Result<Self> {
        let manifest = Manifest::from_path(path)?;
        tracing::debug!(
            "loaded {} ({} variants declared)",
            path.display(),
            manifest.variants.len()
        );
        Ok(Self {
            manifest_path: path.to_path_buf(),
            manifest,
        })
    }

    /// Directory containing the manifest.
    pub fn root(&self) -> &Path {
        self.manifest_path.parent().unwrap_or(Path::new("."))
    }
}

/// Find the manifest: the explicit path if given, else `Axle.toml` in `cwd`
/// or its nearest ancestor.
pub fn locate_manifest(explicit: Option<&Path>, cwd: &Path) -> miette::Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(AxleError::Manifest {
                message: format!("{} does not exist", path.display()),
            }
            .into());
        }
        return Ok(path.to_path_buf());
    }
    let root = find_ancestor_with(cwd, MANIFEST_FILE).ok_or_else(|| AxleError::Manifest {
        message: format!("Could not find {MANIFEST_FILE} in this directory or any parent"),
    })?;
    Ok(root.join(MANIFEST_FILE))
}
