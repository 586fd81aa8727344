//! Class-file inventory of a single library archive.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::core::library::LibraryArchive;
use crate::util::diagnostic::ScanError;

/// The class entries read from one library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryInventory {
    pub library: LibraryArchive,
    pub classes: Vec<String>,
}

/// List the entries of the archive at `path` whose name ends in `class_suffix`.
///
/// Entries are returned in the archive's central-directory order. The file
/// handle is dropped before returning on every path.
pub fn read_class_entries(path: &Path, class_suffix: &str) -> Result<Vec<String>, ScanError> {
    let wrap = |source: ZipError| ScanError::ArchiveRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| wrap(ZipError::Io(e)))?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(wrap)?;

    let mut classes = Vec::new();
    for i in 0..archive.len() {
        let entry = archive.by_index_raw(i).map_err(wrap)?;
        let name = entry.name();
        if name.ends_with(class_suffix) {
            classes.push(name.to_string());
        }
    }

    tracing::debug!("{}: {} class entries", path.display(), classes.len());
    Ok(classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_jar(path: &Path, entries: &[&str]) {
        let file = File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();

        for entry in entries {
            if entry.ends_with('/') {
                zip.add_directory(entry.trim_end_matches('/'), options).unwrap();
            } else {
                zip.start_file(*entry, options).unwrap();
                zip.write_all(&[0xCA, 0xFE, 0xBA, 0xBE]).unwrap();
            }
        }
        zip.finish().unwrap();
    }

    #[test]
    fn test_reads_only_class_entries_in_order() {
        let tmp = TempDir::new().unwrap();
        let jar = tmp.path().join("lib.jar");
        create_jar(
            &jar,
            &[
                "META-INF/",
                "META-INF/MANIFEST.MF",
                "com/example/Foo.class",
                "com/example/Foo$Inner.class",
                "com/example/messages.properties",
                "com/example/Bar.class",
            ],
        );

        let classes = read_class_entries(&jar, ".class").unwrap();
        assert_eq!(
            classes,
            vec![
                "com/example/Foo.class",
                "com/example/Foo$Inner.class",
                "com/example/Bar.class",
            ]
        );
    }

    #[test]
    fn test_class_suffix_is_case_sensitive() {
        let tmp = TempDir::new().unwrap();
        let jar = tmp.path().join("lib.jar");
        create_jar(&jar, &["a/Upper.CLASS", "a/Lower.class"]);

        let classes = read_class_entries(&jar, ".class").unwrap();
        assert_eq!(classes, vec!["a/Lower.class"]);
    }

    #[test]
    fn test_empty_archive() {
        let tmp = TempDir::new().unwrap();
        let jar = tmp.path().join("empty.jar");
        create_jar(&jar, &[]);

        assert!(read_class_entries(&jar, ".class").unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_archive_is_archive_read_error() {
        let tmp = TempDir::new().unwrap();
        let jar = tmp.path().join("broken.jar");
        std::fs::write(&jar, b"definitely not a zip file").unwrap();

        let err = read_class_entries(&jar, ".class").unwrap_err();
        match err {
            ScanError::ArchiveRead { path, .. } => assert_eq!(path, jar),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_archive_is_archive_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = read_class_entries(&tmp.path().join("gone.jar"), ".class").unwrap_err();
        assert!(matches!(err, ScanError::ArchiveRead { .. }));
    }
}
