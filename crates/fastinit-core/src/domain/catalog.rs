//! The template catalog: an immutable, validated registry of descriptors.
//!
//! Built once at startup from the adapters' built-in descriptor list and
//! shared by reference (`Arc<TemplateCatalog>`) for the rest of the process.

use std::collections::HashSet;

use crate::domain::{
    entities::template::TemplateDescriptor, error::DomainError, value_objects::Feature,
};

#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    descriptors: Vec<TemplateDescriptor>,
}

impl TemplateCatalog {
    /// Validate and freeze a descriptor list.
    ///
    /// Rejects descriptors that fail [`TemplateDescriptor::validate`] and
    /// descriptors declared twice with the same path, feature and variant.
    pub fn new(descriptors: Vec<TemplateDescriptor>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for descriptor in &descriptors {
            descriptor.validate()?;
            if !seen.insert((descriptor.path(), descriptor.feature(), descriptor.matcher())) {
                return Err(DomainError::InvalidDescriptor {
                    descriptor: format!("{} {}", descriptor.label(), descriptor.path()),
                    reason: "declared twice".into(),
                });
            }
        }

        Ok(Self { descriptors })
    }

    /// All descriptors tagged with `feature`, in declaration order.
    pub fn templates_for(&self, feature: Feature) -> impl Iterator<Item = &TemplateDescriptor> {
        self.descriptors
            .iter()
            .filter(move |d| d.feature() == feature)
    }

    /// Descriptors included in every project.
    pub fn always_on(&self) -> impl Iterator<Item = &TemplateDescriptor> {
        self.templates_for(Feature::Core)
    }

    pub fn descriptors(&self) -> &[TemplateDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::options::ProjectOptions,
        value_objects::{Linter, Orm},
    };

    fn empty(_: &ProjectOptions) -> String {
        String::new()
    }

    #[test]
    fn groups_descriptors_by_feature() {
        let catalog = TemplateCatalog::new(vec![
            TemplateDescriptor::new("app/main.py", Feature::Core, empty),
            TemplateDescriptor::new("Dockerfile", Feature::Docker, empty),
            TemplateDescriptor::new(".dockerignore", Feature::Docker, empty),
            TemplateDescriptor::variant(".pre-commit-config.yaml", Linter::Ruff, empty),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.always_on().count(), 1);
        assert_eq!(catalog.templates_for(Feature::Docker).count(), 2);
        assert_eq!(catalog.templates_for(Feature::Orm).count(), 0);
    }

    #[test]
    fn same_path_for_exclusive_variants_is_fine() {
        let catalog = TemplateCatalog::new(vec![
            TemplateDescriptor::variant("app/models/user.py", Orm::SqlAlchemy, empty),
            TemplateDescriptor::variant("app/models/user.py", Orm::SqlModel, empty),
        ]);
        assert!(catalog.is_ok());
    }

    #[test]
    fn rejects_exact_duplicates() {
        let err = TemplateCatalog::new(vec![
            TemplateDescriptor::new("app/main.py", Feature::Core, empty),
            TemplateDescriptor::new("app/main.py", Feature::Core, empty),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("declared twice"));
    }

    #[test]
    fn rejects_invalid_descriptor() {
        let err = TemplateCatalog::new(vec![TemplateDescriptor::variant(
            "app/models/user.py",
            Orm::None,
            empty,
        )])
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidDescriptor { .. }));
    }
}
