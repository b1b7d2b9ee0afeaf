pub mod common;
pub mod options;
pub mod project_name;
pub mod project_structure;
pub mod template;

pub use crate::domain::DomainError;
pub use options::ProjectOptions;
pub use project_structure::GenerationPlan;
pub use template::TemplateDescriptor;
