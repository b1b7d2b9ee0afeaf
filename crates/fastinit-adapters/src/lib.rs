//! Infrastructure adapters for fastinit.
//!
//! This crate implements the ports defined in `fastinit_core::application::ports`
//! and ships the built-in FastAPI template catalog. It owns all I/O.

pub mod builtin_templates;
pub mod filesystem;

// Re-export commonly used adapters
pub use builtin_templates::catalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
