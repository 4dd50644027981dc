// ============================================================================
// domain/error.rs
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("Invalid file id: {0:?}")]
    InvalidFileId(String),

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the package root: {path}")]
    PathEscapesRoot { path: String },

    // ========================================================================
    // Registry Construction Errors
    // ========================================================================
    #[error("Duplicate template id in registry: {id}")]
    DuplicateTemplateId { id: String },

    #[error("Template ids '{first}' and '{second}' both write {path}")]
    DuplicateTemplatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("Template registry has no entries")]
    EmptyRegistry,

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown file id '{id}'")]
    UnknownFileId { id: String, known: Vec<String> },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPackageName { name, reason } => vec![
                format!("'{}' cannot be used: {}", name, reason),
                "Package names must be valid Python identifiers".into(),
                "Hyphens are allowed and become underscores in the import name".into(),
                "Examples: my_package, data-tools, utils2".into(),
            ],
            Self::UnknownFileId { id, known } => {
                let mut out = vec![
                    format!("'{}' is not a file id known to this template set", id),
                    "Overrides are keyed by file id, not by path".into(),
                    "Known ids:".into(),
                ];
                out.extend(known.iter().map(|k| format!("  • {k}")));
                out.push("Try: pkgwiz list".into());
                out
            }
            Self::DuplicateTemplateId { id } => vec![
                format!("Two templates share the id '{}'", id),
                "This is a bug in the template set, please report it".into(),
            ],
            Self::DuplicateTemplatePath { path, .. } => vec![
                format!("Only one template may write '{}'", path),
                "This is a bug in the template set, please report it".into(),
            ],
            Self::EmptyRegistry => vec![
                "The template set is empty".into(),
                "This is a bug in the template set, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPackageName { .. }
            | Self::InvalidFileId(_)
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. } => ErrorCategory::Validation,
            Self::UnknownFileId { .. } => ErrorCategory::NotFound,
            Self::DuplicateTemplateId { .. }
            | Self::DuplicateTemplatePath { .. }
            | Self::EmptyRegistry => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
