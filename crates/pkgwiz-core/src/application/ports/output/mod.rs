//! Driven (output) ports - implemented by infrastructure.
//!
//! The `pkgwiz-adapters` crate provides implementations.

use crate::error::WizardResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pkgwiz_adapters::filesystem::LocalFilesystem` (production)
/// - `pkgwiz_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Adapters map their native errors onto the application taxonomy:
/// `create_dir_all` fails with `DirectoryCreationFailure`, `write_file` with
/// `WriteFailure`, anything else with `FilesystemError`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it already
    /// exists.
    fn create_dir_all(&self, path: &Path) -> WizardResult<()>;

    /// Write content to a file, truncating any previous content.
    fn write_file(&self, path: &Path, content: &str) -> WizardResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> WizardResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
