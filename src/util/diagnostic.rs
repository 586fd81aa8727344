//! User-facing diagnostics and the error taxonomy of a scan.
//!
//! Fatal conditions are variants of [`ScanError`]; each carries a stable code
//! and a hint the binary prints underneath the message. Recoverable problems
//! (an unreadable archive, a report that could not be written) are rendered
//! with [`Diagnostic`] and the run continues.

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

/// Fatal and recoverable failures raised by the scan pipeline.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ScanError {
    /// Operator input ended before a required answer was read.
    #[error("no interactive input available: input closed while waiting for {what}")]
    #[diagnostic(
        code(classclash::env::input_closed),
        help("Run interactively, or pass the server home and `--war <INDEX|NAME>`")
    )]
    InputClosed { what: String },

    /// Neither the legacy nor the modern layout was found.
    #[error(
        "could not find server/default (JBoss) or standalone (WildFly) under `{}`",
        root.display()
    )]
    #[diagnostic(
        code(classclash::layout::unrecognized),
        help("Point at a JBoss home (server/default) or a WildFly home (standalone)")
    )]
    NoRecognizedLayout { root: PathBuf },

    /// The layout matched but its deployment directory is absent.
    #[error("could not find the `{name}` directory under `{}`", layout_dir.display())]
    #[diagnostic(code(classclash::layout::missing_deployment_dir))]
    MissingDeploymentDir { name: &'static str, layout_dir: PathBuf },

    /// The deployment directory holds no deployable archive.
    #[error("no deployable archives ending in `{suffix}` found in `{}`", dir.display())]
    #[diagnostic(
        code(classclash::deploy::empty),
        help("Deploy an exploded .war directory before scanning")
    )]
    NoDeployables { dir: PathBuf, suffix: String },

    /// A non-interactive selector matched no candidate.
    #[error(
        "`{selector}` does not name a deployable archive (expected 1-{count} or a file name)"
    )]
    #[diagnostic(
        code(classclash::deploy::unknown),
        help("Run `classclash layout <ROOT>` to list the deployable archives")
    )]
    UnknownDeployable { selector: String, count: usize },

    /// A library archive could not be opened or enumerated.
    #[error("failed to read archive `{}`", path.display())]
    #[diagnostic(code(classclash::inventory::unreadable))]
    ArchiveRead {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl ScanError {
    /// The help line attached to this error, if any.
    pub fn hint(&self) -> Option<String> {
        MietteDiagnostic::help(self).map(|h| h.to_string())
    }
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A rendered failure: message, the file it concerns, and its cause chain.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Additional context lines
    pub context: Vec<String>,
    /// File the failure concerns
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Build a diagnostic from any error, flattening its source chain into context.
    pub fn from_error(severity: Severity, err: &(dyn std::error::Error + 'static)) -> Self {
        let mut diag = Diagnostic {
            message: err.to_string(),
            severity,
            context: Vec::new(),
            location: None,
        };
        let mut source = err.source();
        while let Some(cause) = source {
            diag.context.push(cause.to_string());
            source = cause.source();
        }
        diag
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let severity_str = if color {
            let code = match self.severity {
                Severity::Error => "\x1b[1;31m",
                Severity::Warning => "\x1b[1;33m",
            };
            format!("{}{}\x1b[0m", code, self.severity)
        } else {
            self.severity.to_string()
        };

        output.push_str(&format!("{}: {}\n", severity_str, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  caused by: {}\n", ctx));
        }

        output
    }
}
