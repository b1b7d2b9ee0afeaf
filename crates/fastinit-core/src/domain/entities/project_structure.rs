use std::collections::{BTreeSet, HashMap};

use crate::domain::{
    entities::common::RelativePath, error::DomainError, value_objects::Feature,
};

/// Resolved, ordered list of files ready for materialization.
///
/// This is the output of composition. It contains no business logic, only
/// data, and is guaranteed collision-free and sorted by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    tasks: Vec<GenerationTask>,
}

impl GenerationPlan {
    /// Build a plan, rejecting duplicate output paths.
    pub fn from_tasks(mut tasks: Vec<GenerationTask>) -> Result<Self, DomainError> {
        let mut seen: HashMap<&RelativePath, &str> = HashMap::new();
        for task in &tasks {
            if let Some(first) = seen.insert(&task.path, &task.origin) {
                return Err(DomainError::TemplateConflict {
                    path: task.path.to_string(),
                    first: first.to_string(),
                    second: task.origin.clone(),
                });
            }
        }

        tasks.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(Self { tasks })
    }

    pub fn tasks(&self) -> &[GenerationTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &RelativePath> {
        self.tasks.iter().map(|t| &t.path)
    }

    pub fn get(&self, path: &str) -> Option<&GenerationTask> {
        self.tasks.iter().find(|t| t.path.as_str() == path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Directories implied by the task paths, parents before children.
    pub fn directories(&self) -> Vec<RelativePath> {
        self.tasks
            .iter()
            .flat_map(|t| t.path.ancestors())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn total_bytes(&self) -> usize {
        self.tasks.iter().map(GenerationTask::size).sum()
    }
}

impl IntoIterator for GenerationPlan {
    type Item = GenerationTask;
    type IntoIter = std::vec::IntoIter<GenerationTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}

/// A descriptor bound to the options: a path and its final content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTask {
    path: RelativePath,
    content: String,
    feature: Feature,
    origin: String,
}

impl GenerationTask {
    pub fn new(
        path: RelativePath,
        content: String,
        feature: Feature,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            path,
            content,
            feature,
            origin: origin.into(),
        }
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub const fn feature(&self) -> Feature {
        self.feature
    }

    /// Label of the descriptor that produced this task.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}
