//! Application services.
//!
//! [`FileMaterializer`] makes the per-file write-or-skip decision;
//! [`ScaffoldService`] runs it over a whole registry.

pub mod materializer;
pub mod scaffold_service;

pub use materializer::FileMaterializer;
pub use scaffold_service::ScaffoldService;
