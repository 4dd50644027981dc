//! Core domain layer for pkgwiz.
//!
//! Pure data and decisions: the template registry, the override policy and
//! the outcome types. No I/O happens here; writing is done through the
//! `Filesystem` port defined in the application layer.
//!
//! - **No I/O**: no filesystem, network, or process calls
//! - **Immutable entities**: a registry cannot change once built
//! - **One identifier space**: overrides are keyed by [`FileId`], never by path

pub mod entities;
pub mod error;

mod validation;

pub use entities::{
    common::{Permissions, RelativePath},
    outcome::{ScaffoldReport, WriteAction, WriteOutcome},
    override_policy::{OverrideSet, should_overwrite},
    registry::{TemplateRegistry, TemplateRegistryBuilder},
    render_context::RenderContext,
    template::{FileId, TemplateEntry},
};

pub use error::{DomainError, ErrorCategory};
pub use validation::{DomainValidator, module_name};

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn entry(id: &str, path: &str, content: &str) -> TemplateEntry {
        TemplateEntry::new(id, path, content).unwrap()
    }

    // ========================================================================
    // Registry Tests
    // ========================================================================

    #[test]
    fn registry_preserves_insertion_order() {
        let registry = TemplateRegistry::builder()
            .entry(entry("setup", "setup.py", ""))
            .entry(entry("gitignore", ".gitignore", ""))
            .entry(entry("readme", "README.md", ""))
            .build()
            .unwrap();

        let ids: Vec<_> = registry.ids().map(FileId::as_str).collect();
        assert_eq!(ids, ["setup", "gitignore", "readme"]);
    }

    #[test]
    fn registry_rejects_duplicate_ids() {
        let result = TemplateRegistry::builder()
            .entry(entry("readme", "README.md", "a"))
            .entry(entry("readme", "docs/README.md", "b"))
            .build();

        assert_eq!(
            result.unwrap_err(),
            DomainError::DuplicateTemplateId {
                id: "readme".into()
            }
        );
    }

    #[test]
    fn registry_rejects_two_ids_for_one_path() {
        let result = TemplateRegistry::builder()
            .entry(entry("module-init:io-utils", "pkg/io_utils/__init__.py", ""))
            .entry(entry("module-init:io_utils", "pkg/io_utils/__init__.py", ""))
            .build();

        assert_eq!(
            result.unwrap_err(),
            DomainError::DuplicateTemplatePath {
                path: "pkg/io_utils/__init__.py".into(),
                first: "module-init:io-utils".into(),
                second: "module-init:io_utils".into(),
            }
        );
    }

    #[test]
    fn registry_rejects_empty() {
        let result = TemplateRegistry::builder().build();
        assert_eq!(result.unwrap_err(), DomainError::EmptyRegistry);
    }

    #[test]
    fn registry_rejects_absolute_directory() {
        let result = TemplateRegistry::builder()
            .entry(entry("readme", "README.md", ""))
            .directory("/etc")
            .build();

        assert!(matches!(
            result,
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn skeleton_includes_declared_and_parent_directories() {
        let registry = TemplateRegistry::builder()
            .directory("tests")
            .entry(entry("dockerfile", ".devcontainer/Dockerfile", ""))
            .entry(entry("devcontainer-env", ".devcontainer/devcontainer.env", ""))
            .entry(entry("publish", ".github/workflows/publish.yml", ""))
            .entry(entry("readme", "README.md", ""))
            .build()
            .unwrap();

        assert_eq!(
            registry.skeleton(),
            vec![
                PathBuf::from("tests"),
                PathBuf::from(".devcontainer"),
                PathBuf::from(".github/workflows"),
            ]
        );
    }

    #[test]
    fn check_overrides_reports_unknown_id() {
        let registry = TemplateRegistry::builder()
            .entry(entry("readme", "README.md", ""))
            .build()
            .unwrap();

        let known = OverrideSet::from_ids(["readme"]);
        assert!(registry.check_overrides(&known).is_ok());

        let unknown = OverrideSet::from_ids(["readme", "README.md"]);
        match registry.check_overrides(&unknown) {
            Err(DomainError::UnknownFileId { id, known }) => {
                assert_eq!(id, "README.md");
                assert_eq!(known, vec!["readme".to_string()]);
            }
            other => panic!("expected UnknownFileId, got {other:?}"),
        }
    }

    // ========================================================================
    // Entry Tests
    // ========================================================================

    #[test]
    fn entry_rejects_absolute_path() {
        assert!(TemplateEntry::new("x", "/tmp/x", "").is_err());
    }

    #[test]
    fn entry_rejects_parent_traversal() {
        assert!(matches!(
            TemplateEntry::new("x", "../outside.txt", ""),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn entry_rejects_blank_id() {
        assert!(matches!(
            TemplateEntry::new("  ", "a.txt", ""),
            Err(DomainError::InvalidFileId(_))
        ));
    }

    #[test]
    fn executable_entry_carries_permission() {
        let e = entry("post-create", ".devcontainer/post-create.sh", "#!/bin/sh\n")
            .with_permissions(Permissions::executable());
        assert!(e.permissions().executable_flag());
    }

    // ========================================================================
    // Override Policy Tests
    // ========================================================================

    #[test]
    fn empty_override_set_never_overwrites() {
        let set = OverrideSet::empty();
        assert!(!should_overwrite(&FileId::from("gitignore"), &set));
        assert!(!should_overwrite(&FileId::from(""), &set));
    }

    #[test]
    fn override_is_membership() {
        let set = OverrideSet::from_ids(["gitignore", "setup"]);
        assert!(should_overwrite(&FileId::from("gitignore"), &set));
        assert!(should_overwrite(&FileId::from("setup"), &set));
        assert!(!should_overwrite(&FileId::from("readme"), &set));
    }

    #[test]
    fn override_does_not_match_paths() {
        let set = OverrideSet::from_ids([".gitignore"]);
        assert!(!should_overwrite(&FileId::from("gitignore"), &set));
    }

    // ========================================================================
    // Render Context Tests
    // ========================================================================

    #[test]
    fn render_context_standard_variables() {
        let ctx = RenderContext::new("my-pkg");

        assert_eq!(ctx.get("PACKAGE_NAME"), Some("my-pkg"));
        assert_eq!(ctx.get("MODULE_NAME"), Some("my_pkg"));
    }

    #[test]
    fn render_context_leaves_unknown_placeholders() {
        let ctx = RenderContext::new("demo").with_variable("DOCKER_IMAGE", "python:3.12");
        let out = ctx.render("FROM {{DOCKER_IMAGE}} # {{UNKNOWN}} ${{ secrets.TOKEN }}");

        assert_eq!(out, "FROM python:3.12 # {{UNKNOWN}} ${{ secrets.TOKEN }}");
    }

    #[test]
    fn render_context_does_not_expand_substituted_values() {
        // Each context gets its own hash seed.
        for _ in 0..32 {
            let ctx = RenderContext::new("demo")
                .with_variable("AUTHOR", "{{YEAR}}")
                .with_variable("YEAR", "2024");
            assert_eq!(ctx.render("by {{AUTHOR}} in {{YEAR}}"), "by {{YEAR}} in 2024");
        }
    }

    #[test]
    fn render_context_handles_unclosed_braces() {
        let ctx = RenderContext::new("demo");
        assert_eq!(ctx.render("{{PACKAGE_NAME}} {{ open"), "demo {{ open");
    }

    // ========================================================================
    // Outcome Tests
    // ========================================================================

    #[test]
    fn overwritten_counts_as_created() {
        assert!(WriteAction::Created.is_created());
        assert!(WriteAction::Overwritten.is_created());
        assert!(!WriteAction::Skipped.is_created());
    }

    #[test]
    fn report_counts_actions() {
        let mut report = ScaffoldReport::new();
        report.push(WriteOutcome::new("a", "a", WriteAction::Created));
        report.push(WriteOutcome::new("b", "b", WriteAction::Overwritten));
        report.push(WriteOutcome::new("c", "c", WriteAction::Skipped));

        assert_eq!(report.len(), 3);
        assert_eq!(report.created_count(), 2);
        assert_eq!(report.skipped_count(), 1);
    }
}
