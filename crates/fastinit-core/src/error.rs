//! Unified error handling for fastinit core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with a stable [`ErrorKind`] and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::ErrorKind;

/// Root error type for fastinit core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FastinitError {
    /// Invalid options or a catalog defect found during composition.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failures while materializing the tree.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl FastinitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => e.kind(),
            Self::Application(e) => e.kind(),
        }
    }

    /// Recoverable by changing input (re-prompting, another name).
    pub fn is_recoverable(&self) -> bool {
        self.kind().is_recoverable()
    }

    /// Whether files may have been left on disk.
    pub fn leaves_partial_state(&self) -> bool {
        matches!(self, Self::Application(e) if e.leaves_partial_state())
    }
}

/// Convenient result type alias.
pub type FastinitResult<T> = Result<T, FastinitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn kinds_flow_through_wrappers() {
        let config: FastinitError = DomainError::InvalidProjectName {
            name: "1api".into(),
            reason: "name must start with a letter".into(),
        }
        .into();
        assert_eq!(config.kind(), ErrorKind::InvalidConfiguration);
        assert!(config.is_recoverable());

        let dest: FastinitError = ApplicationError::DestinationUnusable {
            path: PathBuf::from("demo"),
            reason: "directory is not empty".into(),
        }
        .into();
        assert_eq!(dest.kind(), ErrorKind::DestinationUnusable);
        assert!(!dest.leaves_partial_state());
    }

    #[test]
    fn write_failure_reports_partial_state() {
        let err: FastinitError = ApplicationError::WriteFailed {
            task: "app/main.py".into(),
            path: PathBuf::from("/tmp/demo/app/main.py"),
            root: PathBuf::from("/tmp/demo"),
            reason: "disk full".into(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::WriteFailure);
        assert!(err.leaves_partial_state());
        assert!(!err.is_recoverable());
        let msg = err.to_string();
        assert!(msg.contains("app/main.py"));
        assert!(msg.contains("disk full"));
        assert!(msg.contains("incomplete"));
    }
}
