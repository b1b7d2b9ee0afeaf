//! File-tree materializer: writes a [`GenerationPlan`] below a root.
//!
//! Contract:
//! - The root must be missing or an empty directory; anything else fails
//!   with `DestinationUnusable` before a single write.
//! - Files are created, never overwritten. Finding one already present is
//!   an internal error.
//! - No rollback. A failing task leaves earlier files on disk and reports
//!   which task failed and why.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, PathState},
    },
    domain::{GenerationPlan, GenerationTask},
    error::FastinitResult,
};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub files_written: usize,
    pub directories: usize,
    pub bytes_written: usize,
}

pub struct Materializer<'fs> {
    fs: &'fs dyn Filesystem,
}

impl<'fs> Materializer<'fs> {
    pub fn new(fs: &'fs dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Check the root is missing or an empty directory.
    pub fn check_destination(&self, root: &Path) -> FastinitResult<()> {
        match self.fs.probe(root) {
            Ok(PathState::Missing) | Ok(PathState::EmptyDir) => Ok(()),
            Ok(PathState::File) => Err(unusable(root, "a file with that name already exists")),
            Ok(PathState::NonEmptyDir) => {
                Err(unusable(root, "directory already exists and is not empty"))
            }
            Err(e) => Err(unusable(root, format!("cannot inspect path: {e}"))),
        }
    }

    pub fn materialize(&self, root: &Path, plan: &GenerationPlan) -> FastinitResult<ScaffoldReport> {
        self.materialize_with(root, plan, |_| {})
    }

    /// Write every task, calling `on_written` after each file.
    #[instrument(skip_all, fields(root = %root.display(), tasks = plan.len()))]
    pub fn materialize_with(
        &self,
        root: &Path,
        plan: &GenerationPlan,
        mut on_written: impl FnMut(&GenerationTask),
    ) -> FastinitResult<ScaffoldReport> {
        self.check_destination(root)?;
        self.fs
            .create_dir_all(root)
            .map_err(|e| unusable(root, format!("cannot create directory: {e}")))?;

        for task in plan.tasks() {
            let path = target_path(root, task)?;

            if let Some(parent) = path.parent() {
                self.fs
                    .create_dir_all(parent)
                    .map_err(|e| write_failed(root, task, &path, &e))?;
            }

            match self.fs.create_file(&path, task.content()) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    return Err(ApplicationError::FileAlreadyExists { path }.into());
                }
                Err(e) => return Err(write_failed(root, task, &path, &e)),
            }

            debug!(path = %task.path(), bytes = task.size(), "wrote file");
            on_written(task);
        }

        let report = ScaffoldReport {
            root: root.to_path_buf(),
            files_written: plan.len(),
            directories: plan.directories().len(),
            bytes_written: plan.total_bytes(),
        };
        info!(files = report.files_written, "project tree written");
        Ok(report)
    }
}

fn target_path(root: &Path, task: &GenerationTask) -> FastinitResult<PathBuf> {
    let path = root.join(task.path());
    if !path.starts_with(root) {
        return Err(ApplicationError::PathEscapesRoot {
            path,
            root: root.to_path_buf(),
        }
        .into());
    }
    Ok(path)
}

fn unusable(root: &Path, reason: impl Into<String>) -> crate::error::FastinitError {
    ApplicationError::DestinationUnusable {
        path: root.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

fn write_failed(
    root: &Path,
    task: &GenerationTask,
    path: &Path,
    cause: &io::Error,
) -> crate::error::FastinitError {
    ApplicationError::WriteFailed {
        task: task.path().to_string(),
        path: path.to_path_buf(),
        root: root.to_path_buf(),
        reason: cause.to_string(),
    }
    .into()
}
