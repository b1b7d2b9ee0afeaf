//! Catalog Service - read-only queries over the template catalog.
//!
//! Separated from ScaffoldService for single responsibility: listing what
//! the catalog can generate and what switches each entry on.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{
    DEPENDENCY_RULES, Feature, TemplateCatalog, TemplateDescriptor, VariantMatcher,
};

/// Information about a descriptor for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorInfo {
    pub path: String,
    pub feature: Feature,
    pub variant: String,
    /// Human-readable activation condition.
    pub activated_by: String,
}

/// One row of the dependency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub name: &'static str,
    pub includes: Feature,
}

/// Service for catalog queries.
pub struct CatalogService {
    catalog: Arc<TemplateCatalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<TemplateCatalog>) -> Self {
        Self { catalog }
    }

    /// Every descriptor, grouped by feature then path.
    pub fn list(&self) -> Vec<DescriptorInfo> {
        let mut infos: Vec<_> = self.catalog.descriptors().iter().map(describe).collect();
        infos.sort_by(|a, b| (a.feature, &a.path, &a.variant).cmp(&(b.feature, &b.path, &b.variant)));
        infos
    }

    /// Descriptors tagged with one feature.
    pub fn for_feature(&self, feature: Feature) -> Vec<DescriptorInfo> {
        self.list()
            .into_iter()
            .filter(|info| info.feature == feature)
            .collect()
    }

    pub fn rules(&self) -> Vec<RuleInfo> {
        DEPENDENCY_RULES
            .iter()
            .map(|rule| RuleInfo {
                name: rule.name,
                includes: rule.includes,
            })
            .collect()
    }
}

fn describe(descriptor: &TemplateDescriptor) -> DescriptorInfo {
    let feature = descriptor.feature();
    let activated_by = match (feature, descriptor.matcher()) {
        (Feature::Core, _) => "always".to_string(),
        (Feature::Docker, _) => "docker = yes".to_string(),
        (f, _) if f.is_derived() => DEPENDENCY_RULES
            .iter()
            .filter(|rule| rule.includes == f)
            .map(|rule| rule.name)
            .collect::<Vec<_>>()
            .join("; "),
        (f, VariantMatcher::Any) => format!("{f} != none"),
        (f, VariantMatcher::Only(sel)) => format!("{f} = {}", sel.as_str()),
    };

    DescriptorInfo {
        path: descriptor.path().to_string(),
        feature,
        variant: descriptor.matcher().to_string(),
        activated_by,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Orm, ProjectOptions};

    fn empty(_: &ProjectOptions) -> String {
        String::new()
    }

    fn service() -> CatalogService {
        let catalog = TemplateCatalog::new(vec![
            TemplateDescriptor::new("Dockerfile", Feature::Docker, empty),
            TemplateDescriptor::new("app/main.py", Feature::Core, empty),
            TemplateDescriptor::new("app/db/base.py", Feature::DbBase, empty),
            TemplateDescriptor::new("app/db/session.py", Feature::Database, empty),
            TemplateDescriptor::variant("app/models/user.py", Orm::SqlModel, empty),
        ])
        .unwrap();
        CatalogService::new(Arc::new(catalog))
    }

    #[test]
    fn list_is_grouped_by_feature() {
        let features: Vec<_> = service().list().iter().map(|i| i.feature).collect();
        assert_eq!(
            features,
            vec![
                Feature::Core,
                Feature::Database,
                Feature::Orm,
                Feature::DbBase,
                Feature::Docker
            ]
        );
    }

    #[test]
    fn describes_activation() {
        let infos = service().list();
        let by_path = |p: &str| infos.iter().find(|i| i.path == p).unwrap().activated_by.clone();
        assert_eq!(by_path("app/main.py"), "always");
        assert_eq!(by_path("app/db/session.py"), "database != none");
        assert_eq!(by_path("app/models/user.py"), "orm = sqlmodel");
        assert!(by_path("app/db/base.py").contains("declarative base"));
    }

    #[test]
    fn rules_mirror_dependency_table() {
        assert_eq!(service().rules().len(), DEPENDENCY_RULES.len());
    }
}
