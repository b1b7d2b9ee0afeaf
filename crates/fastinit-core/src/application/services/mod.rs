//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "list the catalog".

pub mod catalog_service;
pub mod materializer;
pub mod scaffold_service;

pub use catalog_service::{CatalogService, DescriptorInfo, RuleInfo};
pub use materializer::{Materializer, ScaffoldReport};
pub use scaffold_service::ScaffoldService;
