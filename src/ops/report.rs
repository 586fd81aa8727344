//! Plain-text reports.
//!
//! The full inventory lists every library, in collection order, followed by
//! its class entries:
//!
//! ```text
//! lib/commons-lang.jar
//!   - org/apache/commons/lang/StringUtils.class
//!
//! ```
//!
//! The duplicates report lists each class found in two or more libraries,
//! followed by the libraries that contain it:
//!
//! ```text
//! org/apache/commons/lang/StringUtils.class
//!   - lib/commons-lang.jar
//!   - deployments/app.war/WEB-INF/lib/commons-lang-2.6.jar
//!
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::{ClassLocationMap, LibraryInventory};

/// Write the full inventory report.
pub fn write_all_classes<W: Write>(out: &mut W, inventories: &[LibraryInventory]) -> Result<()> {
    for inventory in inventories {
        writeln!(out, "{}", inventory.library.display_path.display())?;
        for class in &inventory.classes {
            writeln!(out, "  - {}", class)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the duplicates report. Returns the number of duplicate classes.
pub fn write_duplicates<W: Write>(
    out: &mut W,
    map: &ClassLocationMap,
    inventories: &[LibraryInventory],
) -> Result<usize> {
    let mut count = 0;
    for duplicate in map.duplicates() {
        writeln!(out, "{}", duplicate.name)?;
        for owner in duplicate.owners {
            let path = inventories
                .get(owner.0)
                .map(|inv| inv.library.display_path.display().to_string())
                .with_context(|| format!("library #{} missing from inventory", owner.0))?;
            writeln!(out, "  - {}", path)?;
        }
        writeln!(out)?;
        count += 1;
    }
    Ok(count)
}

/// Outcome of writing one report file.
#[derive(Debug)]
pub struct ReportFile {
    pub path: PathBuf,
    pub result: Result<()>,
}

impl ReportFile {
    pub fn is_written(&self) -> bool {
        self.result.is_ok()
    }
}

/// Both report outcomes plus the duplicate count.
#[derive(Debug)]
pub struct ReportOutcome {
    pub all_classes: ReportFile,
    pub duplicates: ReportFile,
    pub duplicate_count: usize,
}

/// Create (or truncate) `path` and fill it with `render`.
fn write_file<T>(path: &Path, render: impl FnOnce(&mut BufWriter<File>) -> Result<T>) -> Result<T> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let value =
        render(&mut out).with_context(|| format!("failed to write report: {}", path.display()))?;
    out.flush()
        .with_context(|| format!("failed to write report: {}", path.display()))?;
    Ok(value)
}

/// Write both reports. A failure writing one does not prevent the other.
pub fn write_reports(
    all_classes_path: &Path,
    duplicates_path: &Path,
    map: &ClassLocationMap,
    inventories: &[LibraryInventory],
) -> ReportOutcome {
    let all_result = write_file(all_classes_path, |out| write_all_classes(out, inventories));
    if let Err(e) = &all_result {
        tracing::debug!("{:#}", e);
    }

    let dup_result = write_file(duplicates_path, |out| write_duplicates(out, map, inventories));
    let duplicate_count = match &dup_result {
        Ok(count) => *count,
        Err(e) => {
            tracing::debug!("{:#}", e);
            map.duplicate_count()
        }
    };

    ReportOutcome {
        all_classes: ReportFile {
            path: all_classes_path.to_path_buf(),
            result: all_result,
        },
        duplicates: ReportFile {
            path: duplicates_path.to_path_buf(),
            result: dup_result.map(|_| ()),
        },
        duplicate_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{build_class_map, LibraryArchive, LibraryId, LibraryOrigin};
    use tempfile::TempDir;

    fn inventory(id: usize, path: &str, classes: &[&str]) -> LibraryInventory {
        LibraryInventory {
            library: LibraryArchive {
                id: LibraryId(id),
                path: PathBuf::from("/srv").join(path),
                display_path: PathBuf::from(path),
                origin: LibraryOrigin::Server,
            },
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn sample() -> Vec<LibraryInventory> {
        vec![
            inventory(0, "lib/a.jar", &["com/example/Foo.class", "com/example/Bar.class"]),
            inventory(1, "lib/empty.jar", &[]),
            inventory(
                2,
                "deploy/app.war/WEB-INF/lib/b.jar",
                &["com/example/Foo.class"],
            ),
        ]
    }

    #[test]
    fn test_all_classes_format() {
        let mut out = Vec::new();
        write_all_classes(&mut out, &sample()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "lib/a.jar\n\
             \x20 - com/example/Foo.class\n\
             \x20 - com/example/Bar.class\n\
             \n\
             lib/empty.jar\n\
             \n\
             deploy/app.war/WEB-INF/lib/b.jar\n\
             \x20 - com/example/Foo.class\n\
             \n"
        );
    }

    #[test]
    fn test_duplicates_format() {
        let inventories = sample();
        let map = build_class_map(&inventories);

        let mut out = Vec::new();
        let count = write_duplicates(&mut out, &map, &inventories).unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "com/example/Foo.class\n\
             \x20 - lib/a.jar\n\
             \x20 - deploy/app.war/WEB-INF/lib/b.jar\n\
             \n"
        );
    }

    #[test]
    fn test_write_reports_overwrites() {
        let tmp = TempDir::new().unwrap();
        let all = tmp.path().join("all-classes.txt");
        let dups = tmp.path().join("duplicate-classes.txt");
        std::fs::write(&all, "stale content that is longer than the new report\n".repeat(50))
            .unwrap();

        let inventories = vec![inventory(0, "lib/a.jar", &["X.class"])];
        let map = build_class_map(&inventories);
        let outcome = write_reports(&all, &dups, &map, &inventories);

        assert!(outcome.all_classes.is_written());
        assert!(outcome.duplicates.is_written());
        assert_eq!(outcome.duplicate_count, 0);
        assert_eq!(
            std::fs::read_to_string(&all).unwrap(),
            "lib/a.jar\n  - X.class\n\n"
        );
        assert_eq!(std::fs::read_to_string(&dups).unwrap(), "");
    }

    #[test]
    fn test_one_failed_report_does_not_block_the_other() {
        let tmp = TempDir::new().unwrap();
        // A directory in the way makes File::create fail.
        let all = tmp.path().join("blocked");
        std::fs::create_dir(&all).unwrap();
        let dups = tmp.path().join("duplicate-classes.txt");

        let inventories = sample();
        let map = build_class_map(&inventories);
        let outcome = write_reports(&all, &dups, &map, &inventories);

        assert!(!outcome.all_classes.is_written());
        assert!(outcome.duplicates.is_written());
        assert_eq!(outcome.duplicate_count, 1);
        assert!(std::fs::read_to_string(&dups)
            .unwrap()
            .starts_with("com/example/Foo.class\n"));
    }
}
