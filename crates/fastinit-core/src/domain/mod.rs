// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for fastinit.
//!
//! This module contains the pure composition logic: the option model, the
//! template catalog, the dependency table and the resolver. All I/O is
//! handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Observability belongs to the application and CLI layers
//! - **Immutable entities**: Options, descriptors and plans never change after construction
//!
// Public API - what the world sees
pub mod catalog;
pub mod entities;
pub mod error;
pub mod render;
pub mod resolver;
pub mod rules;
pub mod value_objects;

// Re-exports for convenience
pub use catalog::TemplateCatalog;
pub use entities::{
    common::RelativePath,
    options::{NoName, OptionsBuilder, ProjectOptions, RawOptions},
    project_name::ProjectName,
    project_structure::{GenerationPlan, GenerationTask},
    template::{ContentGenerator, TemplateDescriptor, VariantMatcher},
};
pub use error::{DomainError, ErrorKind};
pub use render::RenderContext;
pub use resolver::CompositionResolver;
pub use rules::{Activation, DEPENDENCY_RULES, DependencyRule};
pub use value_objects::{Database, Feature, Linter, Orm, Selection, TestFramework};

#[cfg(test)]
mod tests {
    use super::*;

    fn named(opts: &ProjectOptions) -> String {
        RenderContext::for_options(opts).render("name = \"{{PROJECT_NAME}}\"\n")
    }

    fn every_combination() -> Vec<ProjectOptions> {
        let mut out = Vec::new();
        for database in Database::ALL {
            for orm in Orm::ALL {
                for linter in Linter::ALL {
                    for test_framework in TestFramework::ALL {
                        for docker in [false, true] {
                            out.push(
                                ProjectOptions::builder()
                                    .name("demo")
                                    .unwrap()
                                    .database(database)
                                    .orm(orm)
                                    .linter(linter)
                                    .test_framework(test_framework)
                                    .docker(docker)
                                    .build(),
                            );
                        }
                    }
                }
            }
        }
        out
    }

    #[test]
    fn option_space_has_216_combinations() {
        assert_eq!(every_combination().len(), 216);
    }

    #[test]
    fn gating_holds_for_every_combination() {
        let catalog = TemplateCatalog::new(vec![
            TemplateDescriptor::new("pyproject.toml", Feature::Core, named),
            TemplateDescriptor::new("app/db/base.py", Feature::DbBase, named),
            TemplateDescriptor::new("app/models/__init__.py", Feature::Models, named),
            TemplateDescriptor::variant("app/models/user.py", Orm::SqlAlchemy, named),
            TemplateDescriptor::variant("app/models/user.py", Orm::SqlModel, named),
            TemplateDescriptor::new("Dockerfile", Feature::Docker, named),
        ])
        .unwrap();
        let resolver = CompositionResolver::new(&catalog);

        for opts in every_combination() {
            let plan = resolver.resolve(&opts).unwrap();
            assert!(plan.contains("pyproject.toml"));
            assert_eq!(plan.contains("Dockerfile"), opts.docker());
            assert_eq!(plan.contains("app/models/user.py"), !opts.orm().is_none());
            assert_eq!(plan.contains("app/models/__init__.py"), !opts.orm().is_none());
            assert_eq!(plan.contains("app/db/base.py"), opts.uses_persistence());
        }
    }
}
