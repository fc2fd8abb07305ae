//! Icon registry for one icon set
//!
//! Maps utility names to the SVG file they render. Built once per build pass
//! and only read afterwards.

use iconmask_types::IconEntry;
use std::collections::BTreeMap;

/// Registered icons of a single set, keyed by utility name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconRegistry {
    icons: BTreeMap<String, IconEntry>,
}

impl IconRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry under its own name, returning the entry it replaced
    pub fn insert(&mut self, entry: IconEntry) -> Option<IconEntry> {
        self.icons.insert(entry.name.clone(), entry)
    }

    /// Get an entry by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.icons.get(name)
    }

    /// Check whether a name is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// All registered names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    /// All entries, sorted by name
    pub fn entries(&self) -> impl Iterator<Item = &IconEntry> {
        self.icons.values()
    }

    /// Get number of registered icons
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Check if registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Strip a trailing `.svg` from a file name
#[must_use]
pub fn strip_svg_extension(file_name: &str) -> &str {
    file_name.strip_suffix(".svg").unwrap_or(file_name)
}
