pub mod common;
pub mod outcome;
pub mod override_policy;
pub mod registry;
pub mod render_context;
pub mod template;

pub use crate::domain::DomainError;
pub use outcome::{ScaffoldReport, WriteAction, WriteOutcome};
pub use override_policy::OverrideSet;
pub use registry::TemplateRegistry;
pub use template::{FileId, TemplateEntry};
