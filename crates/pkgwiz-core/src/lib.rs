//! pkgwiz Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the pkgwiz
//! package scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pkgwiz-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, FileMaterializer)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │             (Filesystem)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     pkgwiz-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TemplateRegistry, OverrideSet, Outcome)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pkgwiz_core::prelude::*;
//!
//! let registry = TemplateRegistry::builder()
//!     .entry(TemplateEntry::new("gitignore", ".gitignore", "*.pyc\n"))
//!     .entry(TemplateEntry::new("readme", "README.md", "# pkg\n"))
//!     .build()?;
//!
//! let service = ScaffoldService::new(filesystem);
//! let report = service.materialize_all(&registry, "./pkg", &OverrideSet::empty())?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FileMaterializer, ScaffoldFailure, ScaffoldService, ports::Filesystem,
    };
    pub use crate::domain::{
        FileId, OverrideSet, Permissions, RelativePath, RenderContext, ScaffoldReport,
        TemplateEntry, TemplateRegistry, TemplateRegistryBuilder, WriteAction, WriteOutcome,
    };
    pub use crate::error::{WizardError, WizardResult};
}
