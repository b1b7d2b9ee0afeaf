//! Application layer errors.
//!
//! These errors represent failures while materializing a plan, not
//! composition logic. Composition errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorKind;

/// Errors that occur while writing a project tree.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The target root is a file, a non-empty directory, or cannot be created.
    /// Raised before any write.
    #[error("destination {path} is unusable: {reason}")]
    DestinationUnusable { path: PathBuf, reason: String },

    /// An I/O error while writing one task. Files written before it remain.
    #[error("failed to write '{task}' ({path}): {reason}; the project at {root} is incomplete")]
    WriteFailed {
        task: String,
        path: PathBuf,
        root: PathBuf,
        reason: String,
    },

    /// A task found its file already present. Never overwritten.
    #[error("refusing to overwrite existing file {path}")]
    FileAlreadyExists { path: PathBuf },

    /// A task resolved outside the project root.
    #[error("path {path} escapes the project root {root}")]
    PathEscapesRoot { path: PathBuf, root: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationUnusable { path, .. } => vec![
                format!("Nothing was written to {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory, or pass --output to pick another parent".into(),
            ],
            Self::WriteFailed { root, .. } => vec![
                format!("Files written before the failure are still in {}", root.display()),
                "Check free disk space and write permissions".into(),
                "Delete the incomplete directory before trying again".into(),
            ],
            Self::FileAlreadyExists { .. } | Self::PathEscapesRoot { .. } => vec![
                "This appears to be a bug in fastinit".into(),
                "Please report this issue with the options you selected".into(),
            ],
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DestinationUnusable { .. } => ErrorKind::DestinationUnusable,
            Self::WriteFailed { .. } => ErrorKind::WriteFailure,
            Self::FileAlreadyExists { .. } | Self::PathEscapesRoot { .. } => ErrorKind::Internal,
        }
    }

    /// Whether the failure happened after writes began.
    pub fn leaves_partial_state(&self) -> bool {
        matches!(
            self,
            Self::WriteFailed { .. } | Self::FileAlreadyExists { .. }
        )
    }
}
