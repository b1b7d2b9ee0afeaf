//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Resolve the options into a generation plan (pure, may fail early)
//! 2. Check the destination (before any write)
//! 3. Materialize the plan
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, trace};

use crate::{
    application::{
        ports::Filesystem,
        services::materializer::{Materializer, ScaffoldReport},
    },
    domain::{CompositionResolver, GenerationPlan, GenerationTask, ProjectOptions, TemplateCatalog},
    error::FastinitResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    catalog: Arc<TemplateCatalog>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use fastinit_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     Arc::new(catalog), // TemplateCatalog, built once
    ///     filesystem,        // Box<dyn Filesystem>
    /// );
    /// ```
    pub fn new(catalog: Arc<TemplateCatalog>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            catalog,
            filesystem,
        }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Where a project with these options lands below `parent`.
    pub fn project_root(options: &ProjectOptions, parent: impl AsRef<Path>) -> PathBuf {
        parent.as_ref().join(options.name().as_str())
    }

    /// Resolve options into a plan without touching the filesystem.
    #[instrument(skip_all, fields(project = %options.name()))]
    pub fn plan(&self, options: &ProjectOptions) -> FastinitResult<GenerationPlan> {
        let plan = CompositionResolver::new(&self.catalog).resolve(options)?;
        debug!(
            files = plan.len(),
            directories = plan.directories().len(),
            "plan resolved"
        );
        for task in plan.tasks() {
            trace!(path = %task.path(), origin = task.origin(), "planned");
        }
        Ok(plan)
    }

    /// Fail early if the project root is unusable. Performs no writes.
    pub fn check_destination(
        &self,
        options: &ProjectOptions,
        parent: impl AsRef<Path>,
    ) -> FastinitResult<PathBuf> {
        let root = Self::project_root(options, parent);
        Materializer::new(self.filesystem.as_ref()).check_destination(&root)?;
        Ok(root)
    }

    /// Scaffold a new project below `parent`.
    pub fn scaffold(
        &self,
        options: &ProjectOptions,
        parent: impl AsRef<Path>,
    ) -> FastinitResult<ScaffoldReport> {
        self.scaffold_with(options, parent, |_| {})
    }

    /// Scaffold, reporting each written file to `on_written`.
    #[instrument(
        skip_all,
        fields(
            options = %options,
            parent = %parent.as_ref().display()
        )
    )]
    pub fn scaffold_with(
        &self,
        options: &ProjectOptions,
        parent: impl AsRef<Path>,
        on_written: impl FnMut(&GenerationTask),
    ) -> FastinitResult<ScaffoldReport> {
        info!("Scaffolding {}", options.name());

        let plan = self.plan(options)?;
        self.write_plan(options, parent, &plan, on_written)
    }

    /// Materialize an already-resolved plan.
    pub fn write_plan(
        &self,
        options: &ProjectOptions,
        parent: impl AsRef<Path>,
        plan: &GenerationPlan,
        on_written: impl FnMut(&GenerationTask),
    ) -> FastinitResult<ScaffoldReport> {
        let root = Self::project_root(options, parent);
        let report =
            Materializer::new(self.filesystem.as_ref()).materialize_with(&root, plan, on_written)?;

        info!("Scaffold completed successfully");
        Ok(report)
    }
}
