//! fastinit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the fastinit
//! FastAPI project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          fastinit-cli (CLI)             │
//! │   (flags, prompts, config, output)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, Materializer, Catalog)│
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │             (Filesystem)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    fastinit-adapters (Infrastructure)   │
//! │ (LocalFilesystem, MemoryFilesystem,     │
//! │  built-in FastAPI catalog)              │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectOptions, TemplateCatalog,       │
//! │  dependency rules, CompositionResolver) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fastinit_core::prelude::*;
//!
//! // 1. Build options
//! let options = ProjectOptions::builder()
//!     .name("demo")?
//!     .database(Database::PostgreSql)
//!     .orm(Orm::SqlAlchemy)
//!     .build();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = ScaffoldService::new(Arc::new(catalog), Box::new(filesystem));
//! service.scaffold(&options, ".")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, DescriptorInfo, Materializer, ScaffoldReport, ScaffoldService,
        ports::{Filesystem, PathState},
    };
    pub use crate::domain::{
        CompositionResolver, Database, Feature, GenerationPlan, GenerationTask, Linter, Orm,
        ProjectName, ProjectOptions, RawOptions, RenderContext, Selection, TemplateCatalog,
        TemplateDescriptor, TestFramework, VariantMatcher,
    };
    pub use crate::error::{ErrorKind, FastinitError, FastinitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
