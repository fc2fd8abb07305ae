//! Common interface of the icon generators
//!
//! Registration happens when a set is discovered; styles are produced later,
//! one utility at a time, and only for the names that are asked for.

use crate::registry::IconRegistry;
use iconmask_types::{IconEntry, IconError, Result, StyleRecord, StyleRule, Theme};
use std::collections::BTreeSet;
use tracing::debug;

/// A discovered icon set exposing one utility per registered name
pub trait IconSet {
    /// Utility prefix, e.g. `hero` for `hero-home`
    fn prefix(&self) -> &str;

    /// Names registered during discovery
    fn registry(&self) -> &IconRegistry;

    /// Generate the declarations for a registered entry
    ///
    /// # Errors
    ///
    /// Fails when the icon file cannot be read or the theme lacks a size.
    fn style_for(&self, entry: &IconEntry, theme: &dyn Theme) -> Result<StyleRecord>;

    /// Generate the declarations for a name
    ///
    /// # Errors
    ///
    /// Returns [`IconError::UnknownIcon`] for unregistered names, otherwise
    /// the errors of [`IconSet::style_for`].
    fn style(&self, name: &str, theme: &dyn Theme) -> Result<StyleRecord> {
        let entry = self
            .registry()
            .get(name)
            .ok_or_else(|| IconError::UnknownIcon {
                prefix: self.prefix().to_string(),
                name: name.to_string(),
            })?;
        self.style_for(entry, theme)
    }

    /// Class name for a registered name
    fn class_name(&self, name: &str) -> String {
        format!("{}-{}", self.prefix(), name)
    }

    /// Generate rules sorted by name
    ///
    /// With `used`, only names that are both used and registered produce a
    /// rule; without it every registered name does.
    ///
    /// # Errors
    ///
    /// Stops at the first icon whose style cannot be generated.
    fn rules(&self, theme: &dyn Theme, used: Option<&BTreeSet<String>>) -> Result<Vec<StyleRule>> {
        let mut rules = Vec::new();

        for entry in self.registry().entries() {
            if used.is_some_and(|used| !used.contains(&entry.name)) {
                continue;
            }
            let record = self.style_for(entry, theme)?;
            rules.push(StyleRule::new(self.class_name(&entry.name), record));
        }

        debug!("{}: generated {} rules", self.prefix(), rules.len());
        Ok(rules)
    }
}
