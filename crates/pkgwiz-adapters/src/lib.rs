//! Infrastructure adapters for pkgwiz.
//!
//! This crate implements the ports defined in `pkgwiz_core::application::ports`
//! and ships the built-in Python package template set. All real I/O lives
//! here.

pub mod filesystem;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use templates::{PackageOptions, python_package_registry};
