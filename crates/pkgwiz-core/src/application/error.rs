//! Application layer errors.
//!
//! These errors represent failures while touching the filesystem, not
//! problems with the template set. Those are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ScaffoldReport;
use crate::error::{ErrorCategory, WizardError};

/// Errors that occur while materializing a package.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A file could not be written (permissions, disk full, path through a
    /// non-directory). Never retried.
    #[error("Failed to write {path}: {reason}")]
    WriteFailure { path: PathBuf, reason: String },

    /// A skeleton directory could not be created. Raised before any file
    /// write happens.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreationFailure { path: PathBuf, reason: String },

    /// Any other filesystem operation (metadata, permissions).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory adapter lock poisoned.
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WriteFailure { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Re-running is safe: existing files are skipped".into(),
            ],
            Self::DirectoryCreationFailure { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that no regular file sits where a directory is expected".into(),
                "Check that you have write permissions on the output directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Internal
    }
}

/// A scaffold run that stopped on its first error.
///
/// Outcomes recorded before the failure are kept so the caller can report
/// partial progress.
#[derive(Debug, Error, Clone)]
#[error("scaffold aborted after {} file(s): {error}", .completed.len())]
pub struct ScaffoldFailure {
    pub error: WizardError,
    pub completed: ScaffoldReport,
}

impl ScaffoldFailure {
    pub fn new(error: impl Into<WizardError>, completed: ScaffoldReport) -> Self {
        Self {
            error: error.into(),
            completed,
        }
    }

    pub fn into_error(self) -> WizardError {
        self.error
    }
}
