//! Configuration for a scan.
//!
//! Every setting has a built-in default. An operator may override them with a
//! TOML file passed explicitly via `--config`; nothing is discovered
//! implicitly and no environment variables are consulted.
//!
//! ```toml
//! [output]
//! all_classes = "all-classes.txt"
//! duplicate_classes = "duplicate-classes.txt"
//!
//! [scan]
//! deployable_suffix = ".war"
//! archive_suffix = ".jar"
//! class_suffix = ".class"
//! private_lib_dir = "WEB-INF/lib"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default file name of the full inventory report.
pub const ALL_CLASSES_FILE: &str = "all-classes.txt";

/// Default file name of the duplicates report.
pub const DUPLICATE_CLASSES_FILE: &str = "duplicate-classes.txt";

/// Scan configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report file settings
    pub output: OutputConfig,

    /// File name conventions used while scanning
    pub scan: ScanConfig,
}

/// Where the two reports are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name of the full inventory report
    pub all_classes: PathBuf,

    /// File name of the duplicates report
    pub duplicate_classes: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            all_classes: PathBuf::from(ALL_CLASSES_FILE),
            duplicate_classes: PathBuf::from(DUPLICATE_CLASSES_FILE),
        }
    }
}

/// Suffixes and directory names of the deployment conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Suffix of deployable web archives (matched case-insensitively)
    pub deployable_suffix: String,

    /// Suffix of library archives (matched case-insensitively)
    pub archive_suffix: String,

    /// Suffix of class entries inside a library archive (case-sensitive)
    pub class_suffix: String,

    /// Private library directory inside a deployable archive
    pub private_lib_dir: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            deployable_suffix: ".war".to_string(),
            archive_suffix: ".jar".to_string(),
            class_suffix: ".class".to_string(),
            private_lib_dir: PathBuf::from("WEB-INF/lib"),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load the file if one was given, otherwise use the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::load(path)?;
                tracing::debug!("loaded config from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Path of the full inventory report inside `output_dir`.
    pub fn all_classes_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.output.all_classes)
    }

    /// Path of the duplicates report inside `output_dir`.
    pub fn duplicate_classes_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.output.duplicate_classes)
    }
}
