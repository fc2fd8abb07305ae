use crate::config::{resolve_path, Config};
use anyhow::{Context, Result};
use iconmask_sets::output::render;
use iconmask_sets::{HeroIcons, IconSet, LucideIcons, OutputFormat, UsageScanner};
use iconmask_types::{SpacingTheme, StyleRule};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Per-invocation options of `iconmask build`
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    /// Emit every registered icon, ignoring content scanning
    pub all: bool,
}

/// Build service - discovers icon sets and emits their utilities
pub struct BuildService {
    config: Config,
    root: PathBuf,
}

impl BuildService {
    /// Create a build service; relative config paths resolve against `root`
    pub fn new(config: Config, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
        }
    }

    fn theme(&self) -> SpacingTheme {
        SpacingTheme::default().with_overrides(self.config.theme.spacing.clone())
    }

    /// Discover every enabled icon set
    pub fn discover(&self) -> Result<Vec<Box<dyn IconSet>>> {
        let mut sets: Vec<Box<dyn IconSet>> = Vec::new();

        if self.config.sets.hero.enabled {
            let dir = resolve_path(&self.root, &self.config.sets.hero.dir);
            let hero = HeroIcons::discover(&dir)
                .with_context(|| format!("Failed to discover heroicons in {}", dir.display()))?;
            sets.push(Box::new(hero));
        }

        if self.config.sets.lucide.enabled {
            let dir = resolve_path(&self.root, &self.config.sets.lucide.dir);
            let lucide = LucideIcons::discover(&dir)
                .with_context(|| format!("Failed to discover lucide icons in {}", dir.display()))?;
            sets.push(Box::new(lucide));
        }

        Ok(sets)
    }

    /// Generate the rule table
    ///
    /// With content paths configured (and `all` unset) only utilities found
    /// in the templates are generated.
    pub fn generate(&self, all: bool) -> Result<Vec<StyleRule>> {
        let sets = self.discover()?;
        let theme = self.theme();

        let usage = if all || self.config.content.paths.is_empty() {
            None
        } else {
            let roots: Vec<PathBuf> = self
                .config
                .content
                .paths
                .iter()
                .map(|p| resolve_path(&self.root, p))
                .collect();
            let scanner = UsageScanner::new(sets.iter().map(|s| s.prefix()))
                .context("Failed to build usage scanner")?
                .with_extensions(self.config.content.extensions.iter().cloned());
            Some(
                scanner
                    .scan_paths(&roots)
                    .context("Failed to scan content paths")?,
            )
        };

        let none_used = BTreeSet::new();
        let mut rules = Vec::new();

        for set in &sets {
            let used = usage
                .as_ref()
                .map(|u| u.names(set.prefix()).unwrap_or(&none_used));
            let set_rules = set
                .rules(&theme, used)
                .with_context(|| format!("Failed to generate {} utilities", set.prefix()))?;
            debug!(
                "{}: {} of {} icons emitted",
                set.prefix(),
                set_rules.len(),
                set.registry().len()
            );
            rules.extend(set_rules);
        }

        Ok(rules)
    }

    /// Run a build and write the result
    pub fn build(&self, options: &BuildOptions) -> Result<()> {
        info!("Starting iconmask build in {}", self.root.display());

        let rules = self.generate(options.all)?;
        let format = options.format.unwrap_or(self.config.output.format);
        let rendered = render(&rules, format).context("Failed to serialize rules")?;

        let output = options.output.clone().or_else(|| {
            let configured = self.config.output.path.trim();
            (!configured.is_empty()).then(|| resolve_path(&self.root, configured))
        });

        match output {
            Some(path) => {
                write_output(&path, &rendered)?;
                info!("Wrote {} utilities to {}", rules.len(), path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(rendered.as_bytes())
                    .context("Failed to write to stdout")?;
                info!("Wrote {} utilities to stdout", rules.len());
            }
        }

        Ok(())
    }

    /// Registered class names, optionally limited to one set prefix
    pub fn list(&self, prefix: Option<&str>) -> Result<Vec<String>> {
        let sets = self.discover()?;
        let mut names = Vec::new();

        for set in sets.iter().filter(|s| prefix.map_or(true, |p| p == s.prefix())) {
            names.extend(set.registry().names().map(|name| set.class_name(name)));
        }

        Ok(names)
    }
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
