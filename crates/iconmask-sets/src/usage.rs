//! Template scanning for used icon utilities
//!
//! Finds `<prefix>-<name>` tokens in template sources so a build only emits
//! the utilities that are actually referenced. Candidates are not checked
//! against any registry here; unknown names are dropped when rules are
//! generated.

use iconmask_types::{IconError, Result};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into
const SKIPPED_DIRS: &[&str] = &["node_modules", "target"];

/// Names found per prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Usage {
    by_prefix: BTreeMap<String, BTreeSet<String>>,
}

impl Usage {
    /// Names used with `prefix`, if any were found
    #[must_use]
    pub fn names(&self, prefix: &str) -> Option<&BTreeSet<String>> {
        self.by_prefix.get(prefix)
    }

    /// Record a use of `prefix-name`
    pub fn record(&mut self, prefix: &str, name: &str) {
        self.by_prefix
            .entry(prefix.to_string())
            .or_default()
            .insert(name.to_string());
    }

    /// Total distinct candidates across all prefixes
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_prefix.values().map(BTreeSet::len).sum()
    }

    /// Check if nothing was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scanner for utility candidates
#[derive(Debug, Clone)]
pub struct UsageScanner {
    pattern: Regex,
    extensions: Vec<String>,
}

impl UsageScanner {
    /// Create a scanner for the given utility prefixes
    ///
    /// # Errors
    ///
    /// Returns the regex error if the candidate pattern fails to compile.
    pub fn new<I, P>(prefixes: I) -> std::result::Result<Self, regex::Error>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let alternatives: Vec<String> = prefixes
            .into_iter()
            .map(|p| regex::escape(p.as_ref()))
            .collect();

        // A candidate must not be glued to a preceding class character,
        // otherwise `superhero-x` would count as `hero-x`.
        let pattern = format!(
            r"(?:^|[^A-Za-z0-9_-])({})-([A-Za-z0-9_-]+)",
            alternatives.join("|")
        );

        Ok(Self {
            pattern: Regex::new(&pattern)?,
            extensions: Vec::new(),
        })
    }

    /// Only scan files with these extensions when walking directories.
    /// An empty list scans every file.
    #[must_use]
    pub fn with_extensions<I, E>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_string())
            .collect();
        self
    }

    /// Scan a piece of template text
    pub fn scan_str(&self, text: &str, usage: &mut Usage) {
        for captures in self.pattern.captures_iter(text) {
            if let (Some(prefix), Some(name)) = (captures.get(1), captures.get(2)) {
                usage.record(prefix.as_str(), name.as_str());
            }
        }
    }

    /// Scan content roots. Directories are walked recursively; a root given
    /// as a file is always scanned. Missing roots are skipped.
    ///
    /// # Errors
    ///
    /// Fails when an existing directory or file cannot be read.
    pub fn scan_paths(&self, roots: &[PathBuf]) -> Result<Usage> {
        let mut usage = Usage::default();
        let mut files = Vec::new();

        for root in roots {
            if !root.exists() {
                warn!("Content path does not exist: {:?}", root);
                continue;
            }
            if root.is_dir() {
                self.collect_files(root, &mut files)?;
            } else {
                files.push(root.clone());
            }
        }

        for file in &files {
            let bytes = fs::read(file).map_err(|source| IconError::ReadContent {
                path: file.clone(),
                source,
            })?;
            self.scan_str(&String::from_utf8_lossy(&bytes), &mut usage);
        }

        info!(
            "Scanned {} content files, found {} icon candidates",
            files.len(),
            usage.len()
        );
        Ok(usage)
    }

    fn collect_files(&self, root: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_pruned(entry));

        for entry in walker {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(root).to_path_buf();
                IconError::ReadContent {
                    path,
                    source: err.into(),
                }
            })?;

            if entry.file_type().is_file() && self.matches_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(())
    }

    fn matches_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .map(|ext| ext.to_string_lossy())
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }
}

/// Hidden entries and dependency/build directories are never scanned
fn is_pruned(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    let pruned = name.starts_with('.')
        || (entry.file_type().is_dir() && SKIPPED_DIRS.iter().any(|s| name == *s));
    if pruned {
        debug!("Skipping content entry {:?}", entry.path());
    }
    pruned
}
