//! Icon file sources
//!
//! Generators never touch `std::fs` directly; they go through an
//! [`IconSource`] so discovery and style generation can run against an
//! in-memory tree in tests.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read access to a tree of icon files
pub trait IconSource {
    /// Whether `path` exists (file or directory)
    fn exists(&self, path: &Path) -> bool;

    /// List the files directly inside `dir` as `(file_name, full_path)`,
    /// sorted by file name. Subdirectories are not returned.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when `dir` cannot be listed.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<(String, PathBuf)>>;

    /// Read a whole file as text
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be read.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl IconSource for FsSource {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // Follows symlinks, so a link to a directory is skipped too
            if entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            files.push((name, entry.path()));
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// In-memory icon tree
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl MemorySource {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir_all(parent);
        }
        self.files.insert(path, content.into());
        self
    }

    /// Add an empty directory
    #[must_use]
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.add_dir_all(path.as_ref());
        self
    }

    /// Remove a file, leaving its directory in place
    pub fn remove_file(&mut self, path: &Path) -> Option<String> {
        self.files.remove(path)
    }

    fn add_dir_all(&mut self, dir: &Path) {
        for ancestor in dir.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}

impl IconSource for MemorySource {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.contains(path) || self.files.contains_key(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
        if !self.dirs.contains(dir) {
            return Err(not_found(dir));
        }

        Ok(self
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| {
                let name = path.file_name()?.to_string_lossy().into_owned();
                Some((name, path.clone()))
            })
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| not_found(path))
    }
}
