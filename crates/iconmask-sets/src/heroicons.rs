//! Heroicons generator
//!
//! Heroicons ship four weight tiers in fixed subdirectories. Every tier is
//! mandatory: a missing directory fails discovery with the raw I/O error.

use crate::registry::{strip_svg_extension, IconRegistry};
use crate::set::IconSet;
use crate::source::{FsSource, IconSource};
use crate::style::{mask_style, read_inline_svg, theme_value, SIZE_DEFAULT, SIZE_MICRO, SIZE_MINI};
use iconmask_types::{IconEntry, IconError, Result, StyleRecord, Theme};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Utility prefix for Heroicons
pub const HERO_PREFIX: &str = "hero";

/// One weight tier of the Heroicons tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroVariant {
    /// Appended to the file stem to form the utility name
    pub suffix: &'static str,
    /// Path components below the base directory
    pub dir: &'static [&'static str],
}

impl HeroVariant {
    /// Directory of this tier under `base`
    #[must_use]
    pub fn path(&self, base: &Path) -> PathBuf {
        self.dir.iter().fold(base.to_path_buf(), |p, c| p.join(c))
    }
}

/// Tiers in processing order; on a name clash the later tier wins
pub const HERO_VARIANTS: [HeroVariant; 4] = [
    HeroVariant {
        suffix: "",
        dir: &["24", "outline"],
    },
    HeroVariant {
        suffix: "-solid",
        dir: &["24", "solid"],
    },
    HeroVariant {
        suffix: "-mini",
        dir: &["20", "solid"],
    },
    HeroVariant {
        suffix: "-micro",
        dir: &["16", "solid"],
    },
];

/// Size theme key for a Heroicons utility name
#[must_use]
pub fn hero_size_key(name: &str) -> &'static str {
    if name.ends_with("-mini") {
        SIZE_MINI
    } else if name.ends_with("-micro") {
        SIZE_MICRO
    } else {
        SIZE_DEFAULT
    }
}

/// Heroicons set discovered from a base directory
#[derive(Debug, Clone)]
pub struct HeroIcons<S = FsSource> {
    source: S,
    registry: IconRegistry,
}

impl HeroIcons<FsSource> {
    /// Discover icons on the real filesystem
    ///
    /// # Errors
    ///
    /// Fails if any of the four tier directories cannot be listed.
    pub fn discover(base_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::discover_with(FsSource, base_dir)
    }
}

impl<S: IconSource> HeroIcons<S> {
    /// Discover icons through `source`
    ///
    /// # Errors
    ///
    /// Fails if any of the four tier directories cannot be listed.
    pub fn discover_with(source: S, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let mut registry = IconRegistry::new();

        for variant in &HERO_VARIANTS {
            let dir = variant.path(&base_dir);
            let files = source
                .list_files(&dir)
                .map_err(|source| IconError::ReadDir {
                    path: dir.clone(),
                    source,
                })?;

            for (file_name, full_path) in files {
                let stem = strip_svg_extension(&file_name);
                if stem.is_empty() {
                    debug!("Skipping unnamed icon file {:?}", full_path);
                    continue;
                }

                let name = format!("{stem}{}", variant.suffix);
                if let Some(previous) = registry.insert(IconEntry::new(name, full_path)) {
                    debug!(
                        "Icon '{}' from {:?} replaced by a later tier",
                        previous.name, previous.full_path
                    );
                }
            }
        }

        info!("Discovered {} heroicons in {:?}", registry.len(), base_dir);

        Ok(Self { source, registry })
    }
}

impl<S: IconSource> IconSet for HeroIcons<S> {
    fn prefix(&self) -> &str {
        HERO_PREFIX
    }

    fn registry(&self) -> &IconRegistry {
        &self.registry
    }

    fn style_for(&self, entry: &IconEntry, theme: &dyn Theme) -> Result<StyleRecord> {
        let svg = read_inline_svg(&self.source, &entry.full_path)?;
        let size = theme_value(theme, hero_size_key(&entry.name))?;
        Ok(mask_style(HERO_PREFIX, &entry.name, &svg, &size))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use iconmask_types::SpacingTheme;

    const SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <path d=\"M0 0\"/>\n</svg>\n";

    fn full_tree() -> MemorySource {
        MemorySource::new()
            .with_file("icons/24/outline/home.svg", SVG)
            .with_file("icons/24/solid/home.svg", SVG)
            .with_file("icons/20/solid/home.svg", SVG)
            .with_file("icons/16/solid/bolt.svg", SVG)
    }

    #[test]
    fn test_names_follow_variant_suffixes() {
        let set = HeroIcons::discover_with(full_tree(), "icons").unwrap();
        let names: Vec<_> = set.registry().names().collect();
        assert_eq!(names, vec!["bolt-micro", "home", "home-mini", "home-solid"]);
        assert_eq!(
            set.registry().get("home-mini").unwrap().full_path,
            PathBuf::from("icons/20/solid/home.svg")
        );
    }

    #[test]
    fn test_three_tiers_give_three_registrations() {
        let source = MemorySource::new()
            .with_file("icons/24/outline/home.svg", SVG)
            .with_file("icons/24/solid/home.svg", SVG)
            .with_file("icons/20/solid/home.svg", SVG)
            .with_dir("icons/16/solid");

        let set = HeroIcons::discover_with(source, "icons").unwrap();
        let names: Vec<_> = set.registry().names().collect();
        assert_eq!(names, vec!["home", "home-mini", "home-solid"]);
    }

    #[test]
    fn test_later_tier_wins_on_collision() {
        // "x-solid" from outline collides with "x" + "-solid" from solid
        let source = MemorySource::new()
            .with_file("icons/24/outline/x-solid.svg", SVG)
            .with_file("icons/24/solid/x.svg", SVG)
            .with_dir("icons/20/solid")
            .with_dir("icons/16/solid");

        let set = HeroIcons::discover_with(source, "icons").unwrap();
        assert_eq!(set.registry().len(), 1);
        assert_eq!(
            set.registry().get("x-solid").unwrap().full_path,
            PathBuf::from("icons/24/solid/x.svg")
        );
    }

    #[test]
    fn test_missing_tier_fails_discovery() {
        let source = MemorySource::new()
            .with_file("icons/24/outline/home.svg", SVG)
            .with_file("icons/24/solid/home.svg", SVG)
            .with_file("icons/20/solid/home.svg", SVG);

        let err = HeroIcons::discover_with(source, "icons").unwrap_err();
        match err {
            IconError::ReadDir { path, source } => {
                assert_eq!(path, PathBuf::from("icons/16/solid"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected ReadDir error, got {other:?}"),
        }
    }

    #[test]
    fn test_size_by_suffix() {
        assert_eq!(hero_size_key("home"), "spacing.6");
        assert_eq!(hero_size_key("home-solid"), "spacing.6");
        assert_eq!(hero_size_key("home-mini"), "spacing.5");
        assert_eq!(hero_size_key("home-micro"), "spacing.4");
        // decided by the name, not the tier the file came from
        assert_eq!(hero_size_key("arrows-mini"), "spacing.5");
    }

    #[test]
    fn test_style_inlines_svg_and_sizes() {
        let set = HeroIcons::discover_with(full_tree(), "icons").unwrap();
        let theme = SpacingTheme::default();

        let record = set.style("home-mini", &theme).unwrap();
        assert_eq!(
            record.get("--hero-home-mini"),
            Some(
                "url('data:image/svg+xml;utf8,<svg xmlns=\"http://www.w3.org/2000/svg\">  <path d=\"M0 0\"/></svg>')"
            )
        );
        assert_eq!(record.get("width"), Some("1.25rem"));

        let record = set.style("bolt-micro", &theme).unwrap();
        assert_eq!(record.get("height"), Some("1rem"));

        let record = set.style("home-solid", &theme).unwrap();
        assert_eq!(record.get("width"), Some("1.5rem"));
    }

    #[test]
    fn test_payload_differs_from_file_only_by_line_breaks() {
        let set = HeroIcons::discover_with(full_tree(), "icons").unwrap();
        let record = set.style("home", &SpacingTheme::default()).unwrap();

        let value = record.get("--hero-home").unwrap();
        let payload = value
            .strip_prefix("url('data:image/svg+xml;utf8,")
            .and_then(|v| v.strip_suffix("')"))
            .unwrap();
        assert_eq!(payload, SVG.replace('\n', ""));
    }

    #[test]
    fn test_unknown_icon() {
        let set = HeroIcons::discover_with(full_tree(), "icons").unwrap();
        let err = set.style("nope", &SpacingTheme::default()).unwrap_err();
        assert!(matches!(err, IconError::UnknownIcon { ref name, .. } if name == "nope"));
    }

    #[test]
    fn test_file_removed_after_discovery() {
        let mut set = HeroIcons::discover_with(full_tree(), "icons").unwrap();
        set.source
            .remove_file(Path::new("icons/24/outline/home.svg"))
            .unwrap();

        let err = set.style("home", &SpacingTheme::default()).unwrap_err();
        assert!(matches!(err, IconError::ReadFile { .. }));
    }

    #[test]
    fn test_discovery_is_idempotent() {
        let theme = SpacingTheme::default();
        let first = HeroIcons::discover_with(full_tree(), "icons").unwrap();
        let second = HeroIcons::discover_with(full_tree(), "icons").unwrap();

        assert_eq!(first.registry(), second.registry());
        assert_eq!(
            first.rules(&theme, None).unwrap(),
            second.rules(&theme, None).unwrap()
        );
    }
}
