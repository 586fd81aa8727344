//! Class location map and duplicate detection.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::inventory::LibraryInventory;
use crate::core::library::LibraryId;

/// Maps every class entry to the distinct libraries that contain it.
#[derive(Debug, Clone, Default)]
pub struct ClassLocationMap {
    locations: BTreeMap<String, BTreeSet<LibraryId>>,
}

/// A class entry owned by two or more libraries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateClass<'a> {
    pub name: &'a str,
    pub owners: &'a BTreeSet<LibraryId>,
}

impl ClassLocationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `library` contains `class`.
    pub fn insert(&mut self, class: &str, library: LibraryId) {
        match self.locations.get_mut(class) {
            Some(owners) => {
                owners.insert(library);
            }
            None => {
                self.locations
                    .insert(class.to_string(), BTreeSet::from([library]));
            }
        }
    }

    /// Record every class of one library.
    pub fn extend<'a>(&mut self, library: LibraryId, classes: impl IntoIterator<Item = &'a str>) {
        for class in classes {
            self.insert(class, library);
        }
    }

    /// Libraries containing `class`, if it was seen at all.
    pub fn owners(&self, class: &str) -> Option<&BTreeSet<LibraryId>> {
        self.locations.get(class)
    }

    /// Number of distinct class entries.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Class entries found in more than one library, by ascending name.
    pub fn duplicates(&self) -> impl Iterator<Item = DuplicateClass<'_>> {
        self.locations
            .iter()
            .filter(|(_, owners)| owners.len() >= 2)
            .map(|(name, owners)| DuplicateClass { name, owners })
    }

    pub fn duplicate_count(&self) -> usize {
        self.duplicates().count()
    }
}

/// Build the map from every library's inventory.
pub fn build_class_map(inventories: &[LibraryInventory]) -> ClassLocationMap {
    let mut map = ClassLocationMap::new();
    for inventory in inventories {
        map.extend(
            inventory.library.id,
            inventory.classes.iter().map(String::as_str),
        );
    }
    map
}
