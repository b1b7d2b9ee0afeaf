//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `fastinit-adapters` crate provides implementations.

use std::io;
use std::path::Path;

/// What currently sits at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    Missing,
    File,
    EmptyDir,
    NonEmptyDir,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `fastinit_adapters::filesystem::LocalFilesystem` (production)
/// - `fastinit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Methods return `io::Result` so callers can tell "already exists" apart
/// from other failures; the materializer maps them into application errors.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Inspect a path without following it into its contents.
    fn probe(&self, path: &Path) -> io::Result<PathState>;

    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create a new file with `content`.
    ///
    /// Must fail with [`io::ErrorKind::AlreadyExists`] if the file exists.
    fn create_file(&self, path: &Path, content: &str) -> io::Result<()>;
}
