//! In-memory filesystem adapter for testing.
//!
//! Besides recording writes it can inject failures, which is how the
//! partial-write behavior of the materializer is exercised without a real disk.

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use fastinit_core::application::ports::{Filesystem, PathState};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    /// Writes to these paths fail with the given kind.
    failures: BTreeMap<PathBuf, io::ErrorKind>,
    /// Fail every file write after this many succeeded.
    write_budget: Option<usize>,
    write_attempts: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed a file (and its parent directories).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        {
            let mut inner = self.write();
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Seed a directory.
    pub fn with_directory(self, path: impl AsRef<Path>) -> Self {
        insert_ancestors(&mut self.write().directories, path.as_ref());
        self
    }

    /// Make writes to `path` fail with `kind`.
    pub fn fail_on(self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.write().failures.insert(path.into(), kind);
        self
    }

    /// Let `n` file writes succeed, then fail every later one.
    pub fn fail_after(self, n: usize) -> Self {
        self.write().write_budget = Some(n);
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read().files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read().files.keys().cloned().collect()
    }

    pub fn file_count(&self) -> usize {
        self.read().files.len()
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.read().directories.contains(path.as_ref())
    }

    /// Number of `create_file` calls, successful or not.
    pub fn write_attempts(&self) -> usize {
        self.read().write_attempts
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.write();
        inner.files.clear();
        inner.directories.clear();
        inner.write_attempts = 0;
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn probe(&self, path: &Path) -> io::Result<PathState> {
        let inner = self.read();
        if inner.files.contains_key(path) {
            return Ok(PathState::File);
        }
        if !inner.directories.contains(path) {
            return Ok(PathState::Missing);
        }

        let has_children = inner.files.keys().any(|p| p.parent() == Some(path))
            || inner.directories.iter().any(|p| p.parent() == Some(path));
        Ok(if has_children {
            PathState::NonEmptyDir
        } else {
            PathState::EmptyDir
        })
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.write();
        if inner.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} is a file", path.display()),
            ));
        }
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn create_file(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut inner = self.write();
        inner.write_attempts += 1;

        if let Some(kind) = inner.failures.get(path) {
            return Err(io::Error::new(*kind, "injected failure"));
        }
        if let Some(budget) = inner.write_budget {
            if inner.files.len() >= budget {
                return Err(io::Error::other("injected failure: write budget exhausted"));
            }
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    "parent directory does not exist",
                ));
            }
        }
        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
