//! iconmask Types - Core types shared by the icon generators and the CLI
//!
//! This module defines the data model produced by a build pass: registered
//! icon entries, the style records generated for them, and the theme lookup
//! the generators size icons with.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod error;

pub use error::{IconError, Result};

/// A single registered icon
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct IconEntry {
    /// Utility identifier, e.g. `home-solid`
    pub name: String,
    /// Path of the SVG asset on disk
    pub full_path: PathBuf,
}

impl IconEntry {
    pub fn new(name: impl Into<String>, full_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
        }
    }
}

// ============================================================================
// Style output
// ============================================================================

/// CSS declarations for one utility, in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRecord {
    declarations: Vec<(String, String)>,
}

impl StyleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration. A property that is already present keeps its
    /// position and takes the new value.
    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
    }

    /// Builder form of [`StyleRecord::push`]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

impl Serialize for StyleRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for (property, value) in &self.declarations {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

/// A generated utility class and its declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// Class name without the leading dot, e.g. `hero-home-solid`
    pub class_name: String,
    pub record: StyleRecord,
}

impl StyleRule {
    pub fn new(class_name: impl Into<String>, record: StyleRecord) -> Self {
        Self {
            class_name: class_name.into(),
            record,
        }
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Theme lookup in the host tool's dotted form, e.g. `spacing.6`
pub trait Theme {
    fn lookup(&self, path: &str) -> Option<String>;
}

/// Default Tailwind spacing scale
const DEFAULT_SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("px", "1px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("28", "7rem"),
    ("32", "8rem"),
    ("36", "9rem"),
    ("40", "10rem"),
    ("44", "11rem"),
    ("48", "12rem"),
    ("52", "13rem"),
    ("56", "14rem"),
    ("60", "15rem"),
    ("64", "16rem"),
    ("72", "18rem"),
    ("80", "20rem"),
    ("96", "24rem"),
];

/// Theme backed by a spacing scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingTheme {
    spacing: BTreeMap<String, String>,
}

impl SpacingTheme {
    /// Theme with an empty scale; every lookup misses
    pub fn empty() -> Self {
        Self {
            spacing: BTreeMap::new(),
        }
    }

    /// Merge entries over the current scale
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in overrides {
            self.spacing.insert(key.into(), value.into());
        }
        self
    }

    pub fn spacing(&self, key: &str) -> Option<&str> {
        self.spacing.get(key).map(String::as_str)
    }
}

impl Default for SpacingTheme {
    fn default() -> Self {
        Self::empty().with_overrides(DEFAULT_SPACING.iter().copied())
    }
}

impl Theme for SpacingTheme {
    fn lookup(&self, path: &str) -> Option<String> {
        match path.split_once('.') {
            Some(("spacing", key)) => self.spacing(key).map(str::to_string),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spacing_lookup() {
        let theme = SpacingTheme::default();
        assert_eq!(theme.lookup("spacing.4").as_deref(), Some("1rem"));
        assert_eq!(theme.lookup("spacing.5").as_deref(), Some("1.25rem"));
        assert_eq!(theme.lookup("spacing.6").as_deref(), Some("1.5rem"));
        assert_eq!(theme.lookup("spacing.0.5").as_deref(), Some("0.125rem"));
    }

    #[test]
    fn test_lookup_misses() {
        let theme = SpacingTheme::default();
        assert_eq!(theme.lookup("spacing.999"), None);
        assert_eq!(theme.lookup("colors.red"), None);
        assert_eq!(theme.lookup("spacing"), None);
    }

    #[test]
    fn test_overrides_replace_scale_values() {
        let theme = SpacingTheme::default().with_overrides([("6", "24px")]);
        assert_eq!(theme.lookup("spacing.6").as_deref(), Some("24px"));
        assert_eq!(theme.lookup("spacing.5").as_deref(), Some("1.25rem"));
    }

    #[test]
    fn test_record_push_keeps_position() {
        let mut record = StyleRecord::new()
            .with("width", "1rem")
            .with("height", "1rem");
        record.push("width", "2rem");

        let props: Vec<_> = record.iter().collect();
        assert_eq!(props, vec![("width", "2rem"), ("height", "1rem")]);
    }

    #[test]
    fn test_record_serializes_in_order() {
        let record = StyleRecord::new()
            .with("mask", "var(--x)")
            .with("display", "inline-block")
            .with("background-color", "currentColor");

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"mask":"var(--x)","display":"inline-block","background-color":"currentColor"}"#
        );
    }
}
