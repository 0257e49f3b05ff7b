//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// An absolute `config_name` is returned as-is when it exists.
///
/// # Example
/// ```text
/// /home/user/lxclua/website/src/  ← start
/// /home/user/lxclua/monohtml.toml ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("website/src");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("monohtml.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("monohtml.toml")).unwrap();
        assert_eq!(found, dir.path().join("monohtml.toml"));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("monohtml.toml"), "").unwrap();
        fs::write(nested.join("monohtml.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("monohtml.toml")).unwrap();
        assert_eq!(found, nested.join("monohtml.toml"));
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file(dir.path(), &path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("sub/monohtml.toml")).unwrap();
        let start = dir.path().join("sub");
        let found = find_config_file(&start, Path::new("monohtml.toml"));
        // Could still match a real file further up the temp path; never the directory.
        assert_ne!(found, Some(start.join("monohtml.toml")));
    }
}
