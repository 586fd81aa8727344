//! classclash - find duplicate Java classes across the libraries of a
//! JBoss/WildFly deployment.
//!
//! The library resolves the server's deployment layout, collects the jars
//! visible to one deployed web archive, inventories their class entries and
//! reports the classes that more than one jar provides.

pub mod core;
pub mod ops;
pub mod util;

pub use self::core::{
    class_map::ClassLocationMap, deployable::Deployable, layout::ResolvedLayout,
    library::LibraryArchive,
};
pub use util::diagnostic::ScanError;
