//! `classclash scan` command

use std::io;

use anyhow::{bail, Result};

use crate::cli::ScanArgs;
use crate::GlobalOptions;
use classclash::ops::{scan, ReportFile, ScanOptions};
use classclash::util::diagnostic::Severity;
use classclash::util::{Config, Diagnostic, Prompter, Shell, Status};

pub fn execute(args: ScanArgs, global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;

    let opts = ScanOptions {
        root: args.root,
        deployable: args.war,
        output_dir: args.output_dir,
        config: Config::load_optional(args.config.as_deref())?,
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let summary = scan(&opts, &mut prompter, shell)?;

    if summary.unreadable > 0 {
        shell.warn(format!(
            "{} of {} libraries could not be read",
            summary.unreadable, summary.libraries
        ));
    }

    let reports = &summary.reports;
    shell.status(
        Status::Found,
        format!("{} duplicate classes", reports.duplicate_count),
    );

    let mut failed = 0;
    for report in [&reports.all_classes, &reports.duplicates] {
        if !announce(report, shell) {
            failed += 1;
        }
    }
    if failed > 0 {
        bail!("failed to write {} of 2 reports", failed);
    }

    Ok(())
}

/// Print where a report went, or why it did not. Returns whether it was written.
fn announce(report: &ReportFile, shell: &Shell) -> bool {
    match &report.result {
        Ok(()) => {
            shell.status(Status::Wrote, report.path.display());
            true
        }
        Err(e) => {
            let diag = Diagnostic::from_error(Severity::Error, &**e).with_location(&report.path);
            shell.diagnostic(&diag);
            false
        }
    }
}
