//! Implementation of `classclash scan`.
//!
//! The run is strictly sequential: resolve the layout, pick a deployable,
//! collect libraries, inventory them one at a time, then write both reports.
//! Fatal conditions abort before any report is written; unreadable archives
//! are reported and contribute no classes.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use crate::core::{
    build_class_map, collect_libraries, list_deployables, read_class_entries, resolve_layout,
    select_deployable, Deployable, LibraryArchive, LibraryInventory, ResolvedLayout,
};
use crate::ops::report::{write_reports, ReportOutcome};
use crate::util::diagnostic::{Diagnostic, Severity};
use crate::util::prompt::Prompter;
use crate::util::shell::{Shell, Status};
use crate::util::Config;

/// Options for a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Installation root; prompted for when absent
    pub root: Option<PathBuf>,

    /// Deployable selector (1-based index or file name); prompted for when absent
    pub deployable: Option<String>,

    /// Directory the reports are written to
    pub output_dir: PathBuf,

    pub config: Config,
}

/// What a scan found and wrote.
#[derive(Debug)]
pub struct ScanSummary {
    pub layout: ResolvedLayout,
    pub deployable: Deployable,
    /// Libraries collected, including unreadable ones
    pub libraries: usize,
    /// Libraries that could not be read
    pub unreadable: usize,
    /// Distinct class entries across all libraries
    pub classes: usize,
    pub reports: ReportOutcome,
}

/// Ask for the installation root unless one was supplied.
fn installation_root<R: BufRead, W: Write>(
    opts: &ScanOptions,
    prompter: &mut Prompter<R, W>,
) -> Result<PathBuf> {
    match &opts.root {
        Some(root) => Ok(root.clone()),
        None => {
            let answer = prompter.ask_line("JBoss/WildFly home: ", "the server home")?;
            Ok(PathBuf::from(answer))
        }
    }
}

/// Resolve the layout at `root` and list its deployable candidates.
pub fn inspect_layout(root: &Path, config: &Config) -> Result<(ResolvedLayout, Vec<Deployable>)> {
    let layout = resolve_layout(root)?;
    let deployables = list_deployables(&layout.deploy_dir, &config.scan.deployable_suffix)?;
    Ok((layout, deployables))
}

/// Pick the deployable named by the options, or ask the operator.
fn choose_deployable<R: BufRead, W: Write>(
    opts: &ScanOptions,
    candidates: &[Deployable],
    prompter: &mut Prompter<R, W>,
) -> Result<Deployable> {
    match &opts.deployable {
        Some(selector) => Ok(select_deployable(candidates, selector)?.clone()),
        None => {
            let names: Vec<String> = candidates.iter().map(|d| d.name.clone()).collect();
            let index = prompter.choose(&names, "a deployable archive")?;
            Ok(candidates[index].clone())
        }
    }
}

/// Read every library in order. Unreadable archives yield no classes.
fn inventory_libraries(
    libraries: Vec<LibraryArchive>,
    class_suffix: &str,
    shell: &Arc<Shell>,
) -> (Vec<LibraryInventory>, usize) {
    let progress = shell.progress(libraries.len() as u64, "Inventorying");
    let mut unreadable = 0;
    let mut inventories = Vec::with_capacity(libraries.len());

    for library in libraries {
        let line = format!("{} ({})", library.display_path.display(), library.origin);
        if progress.is_visible() {
            progress.suspend(|| shell.verbose(Status::Scanning, &line));
        } else {
            shell.status(Status::Scanning, &line);
        }

        let classes = match read_class_entries(&library.path, class_suffix) {
            Ok(classes) => classes,
            Err(e) => {
                tracing::debug!("{}", e);
                unreadable += 1;
                let diag = Diagnostic::from_error(Severity::Warning, &e);
                progress.suspend(|| shell.diagnostic(&diag));
                Vec::new()
            }
        };

        inventories.push(LibraryInventory { library, classes });
        progress.inc(1);
    }
    progress.finish();

    (inventories, unreadable)
}

/// Run a full scan, prompting through `prompter` for anything not in `opts`.
pub fn scan<R: BufRead, W: Write>(
    opts: &ScanOptions,
    prompter: &mut Prompter<R, W>,
    shell: &Arc<Shell>,
) -> Result<ScanSummary> {
    let config = &opts.config;

    let root = installation_root(opts, prompter)?;
    shell.status(Status::Resolving, format!("layout of {}", root.display()));

    let (layout, candidates) = inspect_layout(&root, config)?;
    shell.status(
        Status::Found,
        format!("{} layout at {}", layout.kind, layout.layout_dir.display()),
    );
    shell.note(format!(
        "{}: {}",
        layout.kind.deploy_dir_name(),
        layout.deploy_dir.display()
    ));

    let deployable = choose_deployable(opts, &candidates, prompter)?;
    shell.note(format!("deployable: {}", deployable.path.display()));
    if !deployable.is_exploded() {
        shell.warn(format!(
            "`{}` is a packed archive; only server-wide libraries will be scanned",
            deployable.name
        ));
    }

    let libraries = collect_libraries(
        &layout,
        &deployable,
        &config.scan.private_lib_dir,
        &config.scan.archive_suffix,
    )?;
    let library_count = libraries.len();

    let span = shell.span(Status::Scanning, format!("{} libraries", library_count));
    let (inventories, unreadable) =
        inventory_libraries(libraries, &config.scan.class_suffix, shell);
    let map = build_class_map(&inventories);
    span.finish_with_message(format!(
        "{} classes from {} libraries",
        map.len(),
        library_count
    ));

    let reports = write_reports(
        &config.all_classes_path(&opts.output_dir),
        &config.duplicate_classes_path(&opts.output_dir),
        &map,
        &inventories,
    );

    Ok(ScanSummary {
        layout,
        deployable,
        libraries: library_count,
        unreadable,
        classes: map.len(),
        reports,
    })
}
