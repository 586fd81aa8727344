//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Check whether `name` ends with `suffix`, ignoring ASCII case.
pub fn has_suffix_ignore_case(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name.is_char_boundary(name.len() - suffix.len())
        && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// List the entries of `dir` whose file name ends in `suffix` (case-insensitive).
///
/// Entries of any kind are returned, sorted by file name. Names that are not
/// valid UTF-8 are compared lossily.
pub fn list_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry =
            entry.with_context(|| format!("failed to read directory: {}", dir.display()))?;
        let name = entry.file_name();
        if has_suffix_ignore_case(&name.to_string_lossy(), suffix) {
            results.push(entry.path());
        }
    }

    results.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(results)
}

/// Like [`list_with_suffix`], but a missing directory, or a path that is not
/// a directory, yields an empty list.
pub fn list_with_suffix_if_exists(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        tracing::debug!("{} does not exist, skipping", dir.display());
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        tracing::warn!("{} is not a directory, skipping", dir.display());
        return Ok(Vec::new());
    }
    list_with_suffix(dir, suffix)
}

/// Get the relative path from `base` to `path`.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// The final component of `path` as a displayable string.
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_has_suffix_ignore_case() {
        assert!(has_suffix_ignore_case("app1.war", ".war"));
        assert!(has_suffix_ignore_case("APP2.WAR", ".war"));
        assert!(has_suffix_ignore_case("Lib.Jar", ".jar"));
        assert!(!has_suffix_ignore_case("app.war.bak", ".war"));
        assert!(!has_suffix_ignore_case("ar", ".war"));
        assert!(!has_suffix_ignore_case("日本.war語", ".war"));
    }

    #[test]
    fn test_list_with_suffix_filters_and_sorts() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.jar"), "").unwrap();
        fs::write(tmp.path().join("A.JAR"), "").unwrap();
        fs::write(tmp.path().join("readme.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("exploded.jar")).unwrap();

        let files = list_with_suffix(tmp.path(), ".jar").unwrap();
        let names: Vec<_> = files.iter().map(|p| file_name_lossy(p)).collect();
        assert_eq!(names, vec!["A.JAR", "b.jar", "exploded.jar"]);
    }

    #[test]
    fn test_list_with_suffix_if_exists_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let files = list_with_suffix_if_exists(&tmp.path().join("nope"), ".jar").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_list_with_suffix_if_exists_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let lib = tmp.path().join("lib");
        fs::write(&lib, "not a directory").unwrap();

        let files = list_with_suffix_if_exists(&lib, ".jar").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_relative_path() {
        let base = Path::new("/opt/wildfly/standalone");
        let jar = Path::new("/opt/wildfly/standalone/deployments/app.war/WEB-INF/lib/a.jar");
        assert_eq!(
            relative_path(base, jar),
            PathBuf::from("deployments/app.war/WEB-INF/lib/a.jar")
        );
    }
}
