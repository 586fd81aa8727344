//! Shared utilities

pub mod config;
pub mod diagnostic;
pub mod fs;
pub mod prompt;
pub mod shell;

pub use config::Config;
pub use diagnostic::{Diagnostic, ScanError};
pub use prompt::Prompter;
pub use shell::{ColorChoice, Shell, Status};
