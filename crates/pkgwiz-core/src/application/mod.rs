//! Application layer for pkgwiz.
//!
//! This layer contains:
//! - **Services**: the file materializer and the scaffold orchestrator
//! - **Ports**: the `Filesystem` trait adapters implement
//! - **Errors**: filesystem failures and partial-run reporting
//!
//! The write-or-skip decision lives in [`FileMaterializer`]; everything else
//! here is sequencing.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{FileMaterializer, ScaffoldService};

pub use ports::Filesystem;

pub use error::{ApplicationError, ScaffoldFailure};
