//! Library archives visible to a deployment.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::deployable::Deployable;
use crate::core::layout::ResolvedLayout;
use crate::util::fs::{list_with_suffix_if_exists, relative_path};

/// Where a library archive was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryOrigin {
    /// The layout's server-wide `lib` directory
    Server,
    /// The deployable's private library directory
    Private,
}

impl fmt::Display for LibraryOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryOrigin::Server => write!(f, "server"),
            LibraryOrigin::Private => write!(f, "private"),
        }
    }
}

/// Index of a library in collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LibraryId(pub usize);

/// A packaged set of classes, keyed by its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryArchive {
    pub id: LibraryId,
    pub path: PathBuf,
    /// Path relative to the layout directory, used in reports
    pub display_path: PathBuf,
    pub origin: LibraryOrigin,
}

/// Gather the server-wide libraries followed by the deployable's private ones.
///
/// A missing directory contributes nothing. Same-named files in both
/// directories are kept as two separate libraries.
pub fn collect_libraries(
    layout: &ResolvedLayout,
    deployable: &Deployable,
    private_lib_dir: &Path,
    archive_suffix: &str,
) -> Result<Vec<LibraryArchive>> {
    let server = list_with_suffix_if_exists(&layout.lib_dir(), archive_suffix)?;
    let private = list_with_suffix_if_exists(
        &deployable.private_lib_dir(private_lib_dir),
        archive_suffix,
    )?;
    tracing::debug!(
        "collected {} server and {} private libraries",
        server.len(),
        private.len()
    );

    let tagged = server
        .into_iter()
        .map(|p| (p, LibraryOrigin::Server))
        .chain(private.into_iter().map(|p| (p, LibraryOrigin::Private)));

    Ok(tagged
        .enumerate()
        .map(|(i, (path, origin))| LibraryArchive {
            id: LibraryId(i),
            display_path: relative_path(&layout.layout_dir, &path),
            path,
            origin,
        })
        .collect())
}
