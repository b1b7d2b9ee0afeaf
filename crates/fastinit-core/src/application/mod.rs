//! Application layer for fastinit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, CatalogService)
//! - **Materializer**: Writes a resolved plan through the filesystem port
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! composition logic itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogService,
    DescriptorInfo, // DTO for catalog listings
    RuleInfo,
    Materializer, ScaffoldReport, ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PathState};

pub use error::ApplicationError;
