// ============================================================================
// domain/error.rs - OPTION, CATALOG AND COMPOSITION ERRORS
// ============================================================================

use thiserror::Error;

/// Errors raised while validating options, building the catalog or
/// resolving a plan. Each maps to an [`ErrorKind`] and carries suggestions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Invalid Configuration
    // ========================================================================
    #[error("invalid {field} '{value}': expected one of {}", .allowed.join(", "))]
    InvalidOption {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    // ========================================================================
    // Template Conflict
    // ========================================================================
    #[error("template conflict at '{path}': produced by both {first} and {second}")]
    TemplateConflict {
        path: String,
        first: String,
        second: String,
    },

    // ========================================================================
    // Catalog authoring
    // ========================================================================
    #[error("invalid template descriptor {descriptor}: {reason}")]
    InvalidDescriptor { descriptor: String, reason: String },

    #[error("invalid output path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidOption { field, allowed, .. } => vec![
                format!("Choose a supported {field}: {}", allowed.join(", ")),
                "Try: fastinit list to see what each choice generates".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Use letters, digits, '-' or '_', starting with a letter".into(),
                "The name becomes a Python package once '-' is replaced by '_'".into(),
                "Example: fastinit new my-api".into(),
            ],
            Self::TemplateConflict { path, .. } => vec![
                format!("Two templates write '{path}'; the built-in catalog is inconsistent"),
                "Please report this issue with the options you selected".into(),
            ],
            Self::InvalidDescriptor { .. } | Self::InvalidPath { .. } => vec![
                "The template catalog is malformed".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Error kind for CLI display styling and exit codes.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOption { .. } | Self::InvalidProjectName { .. } => {
                ErrorKind::InvalidConfiguration
            }
            Self::TemplateConflict { .. } => ErrorKind::TemplateConflict,
            Self::InvalidDescriptor { .. } | Self::InvalidPath { .. } => ErrorKind::Internal,
        }
    }
}

/// The failure classes a scaffolding run can end in.
///
/// `InvalidConfiguration` and `DestinationUnusable` are raised before any
/// write. `WriteFailure` is the only kind that leaves a partial tree behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidConfiguration,
    TemplateConflict,
    DestinationUnusable,
    WriteFailure,
    Internal,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration => "invalid-configuration",
            Self::TemplateConflict => "template-conflict",
            Self::DestinationUnusable => "destination-unusable",
            Self::WriteFailure => "write-failure",
            Self::Internal => "internal",
        }
    }

    /// Whether the user can fix this by changing their input.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidConfiguration | Self::DestinationUnusable)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
