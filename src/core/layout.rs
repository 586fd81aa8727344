//! Deployment layout discovery.
//!
//! Two server conventions are recognized:
//!
//! - **Legacy** (JBoss AS): `<root>/server/default/{lib,deploy}`, or `lib` and
//!   `deploy` directly under the root.
//! - **Modern** (WildFly): `<root>/standalone/{lib,deployments}`, or `lib` and
//!   `deployments` directly under the root.
//!
//! The legacy layout is preferred whenever its directory exists.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::util::diagnostic::ScanError;

/// Server-wide library directory name, shared by both layouts.
pub const LIB_DIR: &str = "lib";

/// The two supported deployment conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentLayout {
    Legacy,
    Modern,
}

impl DeploymentLayout {
    /// Name of the deployment directory under the layout directory.
    pub fn deploy_dir_name(&self) -> &'static str {
        match self {
            DeploymentLayout::Legacy => "deploy",
            DeploymentLayout::Modern => "deployments",
        }
    }

    /// Nested location of the layout directory relative to the root.
    pub fn nested_dir(&self) -> &'static Path {
        match self {
            DeploymentLayout::Legacy => Path::new("server/default"),
            DeploymentLayout::Modern => Path::new("standalone"),
        }
    }

    /// Locate this layout's directory under `root`.
    ///
    /// If both `lib` and the deployment directory sit directly under the root,
    /// the root itself is the layout directory; otherwise the nested location
    /// is returned without checking that it exists.
    pub fn candidate_dir(&self, root: &Path) -> PathBuf {
        if root.join(LIB_DIR).exists() && root.join(self.deploy_dir_name()).exists() {
            root.to_path_buf()
        } else {
            root.join(self.nested_dir())
        }
    }
}

impl fmt::Display for DeploymentLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentLayout::Legacy => write!(f, "jboss"),
            DeploymentLayout::Modern => write!(f, "wildfly"),
        }
    }
}

/// The outcome of layout resolution for one installation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub kind: DeploymentLayout,
    /// Installation root as given by the operator
    pub root: PathBuf,
    /// `server/default`, `standalone`, or the root itself
    pub layout_dir: PathBuf,
    /// `deploy` or `deployments` under the layout directory
    pub deploy_dir: PathBuf,
}

impl ResolvedLayout {
    /// Server-wide library directory.
    pub fn lib_dir(&self) -> PathBuf {
        self.layout_dir.join(LIB_DIR)
    }
}

/// Determine the deployment layout of the installation at `root`.
pub fn resolve_layout(root: &Path) -> Result<ResolvedLayout, ScanError> {
    let legacy_dir = DeploymentLayout::Legacy.candidate_dir(root);
    let modern_dir = DeploymentLayout::Modern.candidate_dir(root);

    let (kind, layout_dir) = if legacy_dir.exists() {
        (DeploymentLayout::Legacy, legacy_dir)
    } else if modern_dir.exists() {
        (DeploymentLayout::Modern, modern_dir)
    } else {
        tracing::debug!(
            "neither {} nor {} exists",
            legacy_dir.display(),
            modern_dir.display()
        );
        return Err(ScanError::NoRecognizedLayout {
            root: root.to_path_buf(),
        });
    };
    tracing::debug!("{} layout at {}", kind, layout_dir.display());

    let deploy_dir = layout_dir.join(kind.deploy_dir_name());
    if !deploy_dir.exists() {
        return Err(ScanError::MissingDeploymentDir {
            name: kind.deploy_dir_name(),
            layout_dir,
        });
    }

    Ok(ResolvedLayout {
        kind,
        root: root.to_path_buf(),
        layout_dir,
        deploy_dir,
    })
}
