//! Deployable web archives found in a layout's deployment directory.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::util::diagnostic::ScanError;
use crate::util::fs::{file_name_lossy, list_with_suffix};

/// One candidate for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployable {
    pub path: PathBuf,
    pub name: String,
}

impl Deployable {
    pub fn new(path: PathBuf) -> Self {
        let name = file_name_lossy(&path);
        Deployable { path, name }
    }

    /// Exploded deployments are directories; packed ones are plain files.
    pub fn is_exploded(&self) -> bool {
        self.path.is_dir()
    }

    /// The deployable's private library directory.
    pub fn private_lib_dir(&self, relative: &Path) -> PathBuf {
        self.path.join(relative)
    }
}

/// List every entry of `deploy_dir` ending in `suffix` (case-insensitive),
/// sorted by name.
///
/// An empty result is an error: there is nothing for the operator to choose.
pub fn list_deployables(deploy_dir: &Path, suffix: &str) -> Result<Vec<Deployable>> {
    let deployables: Vec<Deployable> = list_with_suffix(deploy_dir, suffix)?
        .into_iter()
        .map(Deployable::new)
        .collect();

    if deployables.is_empty() {
        return Err(ScanError::NoDeployables {
            dir: deploy_dir.to_path_buf(),
            suffix: suffix.to_string(),
        }
        .into());
    }

    tracing::debug!(
        "{} deployable(s) in {}",
        deployables.len(),
        deploy_dir.display()
    );
    Ok(deployables)
}

/// Pick a candidate by 1-based index or by file name (case-insensitive).
pub fn select_deployable<'a>(
    candidates: &'a [Deployable],
    selector: &str,
) -> Result<&'a Deployable, ScanError> {
    let selector = selector.trim();

    if let Ok(n) = selector.parse::<usize>() {
        if let Some(found) = n.checked_sub(1).and_then(|i| candidates.get(i)) {
            return Ok(found);
        }
    }

    candidates
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(selector))
        .ok_or_else(|| ScanError::UnknownDeployable {
            selector: selector.to_string(),
            count: candidates.len(),
        })
}
