use std::path::{Path, PathBuf};

use crate::errors::AxleError;

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Read a file to a string, naming the path in the error.
pub fn read_to_string(path: &Path) -> Result<String, AxleError> {
    std::fs::read_to_string(path).map_err(|e| AxleError::Generic {
        message: format!("Failed to read {}: {e}", path.display()),
    })
}

/// Returns the user's home directory from `HOME` or `USERPROFILE`.
pub fn home_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn finds_manifest_in_parent() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("Axle.toml"), "").unwrap();
        let nested = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_ancestor_with(&nested, "Axle.toml").unwrap();
        assert_eq!(found, tmp.path());
    }

    #[test]
    fn read_missing_file_names_path() {
        let tmp = TempDir::new().unwrap();
        let err = read_to_string(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("nope.toml"), "got: {err}");
    }
}
