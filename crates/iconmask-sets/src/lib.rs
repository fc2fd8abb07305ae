//! iconmask icon sets
//!
//! Build-time generators that expose SVG icon directories as CSS utility
//! classes rendered through `mask`, so icons take the text colour.
//!
//! ## Sets
//!
//! - [`HeroIcons`]: four mandatory weight tiers (`hero-home`,
//!   `hero-home-solid`, `hero-home-mini`, `hero-home-micro`)
//! - [`LucideIcons`]: one optional flat directory (`lucide-camera`)
//!
//! ## Phases
//!
//! Discovery lists the icon directories and fills an [`IconRegistry`].
//! Style generation reads an icon file only when its utility is requested,
//! inlines it as a data URI and sizes it from the injected theme.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod heroicons;
pub mod lucide;
pub mod output;
pub mod registry;
pub mod set;
pub mod source;
pub mod style;
pub mod usage;

pub use heroicons::{HeroIcons, HERO_PREFIX};
pub use lucide::{LucideIcons, LUCIDE_PREFIX};
pub use output::OutputFormat;
pub use registry::IconRegistry;
pub use set::IconSet;
pub use source::{FsSource, IconSource, MemorySource};
pub use usage::{Usage, UsageScanner};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{HeroIcons, IconRegistry, IconSet, LucideIcons, OutputFormat, UsageScanner};
}
