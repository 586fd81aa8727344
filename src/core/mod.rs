//! Core domain model: layouts, deployables, libraries and their classes.

pub mod class_map;
pub mod deployable;
pub mod inventory;
pub mod layout;
pub mod library;

pub use class_map::{build_class_map, ClassLocationMap, DuplicateClass};
pub use deployable::{list_deployables, select_deployable, Deployable};
pub use inventory::{read_class_entries, LibraryInventory};
pub use layout::{resolve_layout, DeploymentLayout, ResolvedLayout};
pub use library::{collect_libraries, LibraryArchive, LibraryId, LibraryOrigin};
