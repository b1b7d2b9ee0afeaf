//! Composition: from options to an ordered, collision-free generation plan.
//!
//! 1. Always-on descriptors
//! 2. Descriptors of every active option slot whose variant matches
//! 3. Descriptors of derived features switched on by the dependency table
//! 4. Bind each generator to the options
//! 5. Reject duplicate output paths
//! 6. Sort by path
//!
//! Nothing here touches the filesystem.

use crate::domain::{
    catalog::TemplateCatalog,
    entities::{
        options::ProjectOptions,
        project_structure::{GenerationPlan, GenerationTask},
        template::TemplateDescriptor,
    },
    error::DomainError,
    rules,
};

#[derive(Debug, Clone, Copy)]
pub struct CompositionResolver<'c> {
    catalog: &'c TemplateCatalog,
}

impl<'c> CompositionResolver<'c> {
    pub fn new(catalog: &'c TemplateCatalog) -> Self {
        Self { catalog }
    }

    /// Steps 1-3: the descriptors that apply, before binding.
    pub fn select(&self, options: &ProjectOptions) -> Vec<&'c TemplateDescriptor> {
        let catalog = self.catalog;
        rules::active_features(options)
            .into_iter()
            .flat_map(move |(feature, active)| {
                catalog
                    .templates_for(feature)
                    .filter(move |d| d.matcher().matches(active))
            })
            .collect()
    }

    /// Full resolution into a [`GenerationPlan`].
    pub fn resolve(&self, options: &ProjectOptions) -> Result<GenerationPlan, DomainError> {
        let tasks = self
            .select(options)
            .into_iter()
            .map(|d| {
                GenerationTask::new(d.path().clone(), d.render(options), d.feature(), d.label())
            })
            .collect();

        GenerationPlan::from_tasks(tasks)
    }
}
