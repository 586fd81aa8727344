//! Command implementations

pub mod layout;
pub mod scan;
