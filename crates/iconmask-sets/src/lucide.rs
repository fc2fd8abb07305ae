//! Lucide generator
//!
//! Lucide is an optional set: a flat directory of SVG files with a single
//! size tier. When the directory is absent the set is simply empty.

use crate::registry::{strip_svg_extension, IconRegistry};
use crate::set::IconSet;
use crate::source::{FsSource, IconSource};
use crate::style::{mask_style, read_inline_svg, theme_value, SIZE_DEFAULT};
use iconmask_types::{IconEntry, IconError, Result, StyleRecord, Theme};
use std::path::PathBuf;
use tracing::{debug, info};

/// Utility prefix for Lucide icons
pub const LUCIDE_PREFIX: &str = "lucide";

/// Lucide set discovered from one directory
#[derive(Debug, Clone)]
pub struct LucideIcons<S = FsSource> {
    source: S,
    registry: IconRegistry,
}

impl LucideIcons<FsSource> {
    /// Discover icons on the real filesystem
    ///
    /// # Errors
    ///
    /// Fails only if the directory exists but cannot be listed.
    pub fn discover(dir: impl Into<PathBuf>) -> Result<Self> {
        Self::discover_with(FsSource, dir)
    }
}

impl<S: IconSource> LucideIcons<S> {
    /// Discover icons through `source`
    ///
    /// # Errors
    ///
    /// Fails only if the directory exists but cannot be listed.
    pub fn discover_with(source: S, dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let mut registry = IconRegistry::new();

        if !source.exists(&dir) {
            debug!("Lucide directory does not exist: {:?}", dir);
            return Ok(Self { source, registry });
        }

        let files = source
            .list_files(&dir)
            .map_err(|source| IconError::ReadDir {
                path: dir.clone(),
                source,
            })?;

        for (file_name, full_path) in files {
            if !file_name.ends_with(".svg") {
                continue;
            }
            let name = strip_svg_extension(&file_name);
            if name.is_empty() {
                debug!("Skipping unnamed icon file {:?}", full_path);
                continue;
            }
            registry.insert(IconEntry::new(name, full_path));
        }

        info!("Discovered {} lucide icons in {:?}", registry.len(), dir);

        Ok(Self { source, registry })
    }
}

impl<S: IconSource> IconSet for LucideIcons<S> {
    fn prefix(&self) -> &str {
        LUCIDE_PREFIX
    }

    fn registry(&self) -> &IconRegistry {
        &self.registry
    }

    fn style_for(&self, entry: &IconEntry, theme: &dyn Theme) -> Result<StyleRecord> {
        let svg = read_inline_svg(&self.source, &entry.full_path)?;
        let size = theme_value(theme, SIZE_DEFAULT)?;
        Ok(mask_style(LUCIDE_PREFIX, &entry.name, &svg, &size))
    }
}
