//! High-level operations.
//!
//! This module contains the implementation of classclash commands.

pub mod report;
pub mod scan;

pub use report::{write_reports, ReportFile, ReportOutcome};
pub use scan::{inspect_layout, scan, ScanOptions, ScanSummary};
