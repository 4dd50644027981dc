//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole run:
//! 1. Create the directory skeleton
//! 2. For each registry entry, consult the override policy
//! 3. Hand the entry to the materializer and collect the outcome
//!
//! It stops at the first failure and returns the outcomes gathered so far
//! together with the error.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ScaffoldFailure, ports::Filesystem, services::FileMaterializer,
    },
    domain::{
        OverrideSet, ScaffoldReport, TemplateEntry, TemplateRegistry, should_overwrite,
    },
    error::{WizardError, WizardResult},
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Materialize every entry of `registry` under `root`.
    ///
    /// Entries are processed in registry order. Files whose id is in
    /// `overrides` are rewritten if they exist; all other existing files are
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`ScaffoldFailure`] on the first error. When the skeleton
    /// cannot be created no file has been written and `completed` is empty.
    #[instrument(
        skip_all,
        fields(
            root = %root.as_ref().display(),
            entries = registry.len(),
            overrides = overrides.len()
        )
    )]
    pub fn materialize_all(
        &self,
        registry: &TemplateRegistry,
        root: impl AsRef<Path>,
        overrides: &OverrideSet,
    ) -> Result<ScaffoldReport, ScaffoldFailure> {
        let root = root.as_ref();
        let mut report = ScaffoldReport::new();

        self.warn_unknown_overrides(registry, overrides);

        if let Err(e) = self.create_skeleton(registry, root) {
            return Err(ScaffoldFailure::new(e, report));
        }

        let materializer = FileMaterializer::new(self.filesystem.as_ref());

        for entry in registry.entries() {
            if let Err(e) =
                self.materialize_entry(&materializer, entry, root, overrides, &mut report)
            {
                warn!(
                    id = %entry.id(),
                    completed = report.len(),
                    error = %e,
                    "Scaffold aborted"
                );
                return Err(ScaffoldFailure::new(e, report));
            }
        }

        info!(
            created = report.created_count(),
            skipped = report.skipped_count(),
            "Scaffold completed"
        );
        Ok(report)
    }

    /// Predict the outcome of [`Self::materialize_all`] without creating
    /// directories or writing files.
    pub fn preview(
        &self,
        registry: &TemplateRegistry,
        root: impl AsRef<Path>,
        overrides: &OverrideSet,
    ) -> ScaffoldReport {
        let root = root.as_ref();
        let materializer = FileMaterializer::new(self.filesystem.as_ref());
        let mut report = ScaffoldReport::new();

        for entry in registry.entries() {
            let path = root.join(entry.relative_path());
            let overwrite = should_overwrite(entry.id(), overrides);
            report.push(materializer.predict(entry.id(), &path, overwrite));
        }

        report
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Create the root and every skeleton directory. Idempotent.
    fn create_skeleton(
        &self,
        registry: &TemplateRegistry,
        root: &Path,
    ) -> WizardResult<Vec<PathBuf>> {
        let dirs: Vec<PathBuf> = std::iter::once(root.to_path_buf())
            .chain(registry.skeleton().into_iter().map(|d| root.join(d)))
            .collect();

        for dir in &dirs {
            self.filesystem
                .create_dir_all(dir)
                .map_err(|e| match e {
                    // Adapters may report a generic error; the skeleton step
                    // always surfaces as a directory failure.
                    WizardError::Application(ApplicationError::FilesystemError {
                        path,
                        reason,
                    }) => ApplicationError::DirectoryCreationFailure { path, reason }.into(),
                    other => other,
                })?;
            debug!(path = %dir.display(), "directory ready");
        }

        Ok(dirs)
    }

    /// Write one entry and record its outcome in `report`. The outcome is
    /// recorded as soon as the file is written, so a failing chmod still
    /// leaves it in the report.
    fn materialize_entry(
        &self,
        materializer: &FileMaterializer<'_>,
        entry: &TemplateEntry,
        root: &Path,
        overrides: &OverrideSet,
        report: &mut ScaffoldReport,
    ) -> WizardResult<()> {
        let path = root.join(entry.relative_path());
        let overwrite = should_overwrite(entry.id(), overrides);

        let outcome = materializer.materialize(entry.id(), &path, entry.content(), overwrite)?;
        let written = outcome.action.is_created();
        report.push(outcome);

        if written && entry.permissions().executable_flag() {
            self.filesystem.set_permissions(&path, true)?;
        }

        Ok(())
    }

    fn warn_unknown_overrides(&self, registry: &TemplateRegistry, overrides: &OverrideSet) {
        for id in overrides.iter().filter(|id| !registry.contains(id)) {
            warn!(id = %id, "Override names no file in this registry; ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{Permissions, WriteAction};

    fn registry() -> TemplateRegistry {
        TemplateRegistry::builder()
            .entry(TemplateEntry::new("gitignore", ".gitignore", "*.pyc\n").unwrap())
            .entry(TemplateEntry::new("readme", "README.md", "# pkg\n").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn skeleton_failure_aborts_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|path| {
            Err(ApplicationError::DirectoryCreationFailure {
                path: path.to_path_buf(),
                reason: "read-only filesystem".into(),
            }
            .into())
        });
        fs.expect_exists().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs));
        let failure = service
            .materialize_all(&registry(), "/out/pkg", &OverrideSet::empty())
            .unwrap_err();

        assert!(failure.completed.is_empty());
        assert!(matches!(
            failure.error,
            WizardError::Application(ApplicationError::DirectoryCreationFailure { .. })
        ));
    }

    #[test]
    fn generic_directory_error_is_reported_as_directory_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not a directory".into(),
            }
            .into())
        });

        let failure = ScaffoldService::new(Box::new(fs))
            .materialize_all(&registry(), "/out/pkg", &OverrideSet::empty())
            .unwrap_err();

        assert!(matches!(
            failure.error,
            WizardError::Application(ApplicationError::DirectoryCreationFailure { .. })
        ));
    }

    #[test]
    fn executable_bit_set_only_when_written() {
        let registry = TemplateRegistry::builder()
            .entry(
                TemplateEntry::new("post-create", ".devcontainer/post-create.sh", "#!/bin/sh\n")
                    .unwrap()
                    .with_permissions(Permissions::executable()),
            )
            .build()
            .unwrap();

        // Fresh run: written, then chmod.
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));
        fs.expect_set_permissions()
            .withf(|_, executable| *executable)
            .times(1)
            .returning(|_, _| Ok(()));

        let report = ScaffoldService::new(Box::new(fs))
            .materialize_all(&registry, "/out/pkg", &OverrideSet::empty())
            .unwrap();
        assert_eq!(report.outcomes()[0].action, WriteAction::Created);

        // Existing file, no override: untouched, permissions too.
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().return_const(true);
        fs.expect_write_file().never();
        fs.expect_set_permissions().never();

        let report = ScaffoldService::new(Box::new(fs))
            .materialize_all(&registry, "/out/pkg", &OverrideSet::empty())
            .unwrap();
        assert_eq!(report.outcomes()[0].action, WriteAction::Skipped);
    }

    #[test]
    fn failed_chmod_keeps_the_written_file_in_the_report() {
        let registry = TemplateRegistry::builder()
            .entry(TemplateEntry::new("readme", "README.md", "# pkg\n").unwrap())
            .entry(
                TemplateEntry::new("post-create", ".devcontainer/post-create.sh", "#!/bin/sh\n")
                    .unwrap()
                    .with_permissions(Permissions::executable()),
            )
            .entry(TemplateEntry::new("gitignore", ".gitignore", "*.pyc\n").unwrap())
            .build()
            .unwrap();

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));
        fs.expect_set_permissions().times(1).returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "operation not permitted".into(),
            }
            .into())
        });

        let failure = ScaffoldService::new(Box::new(fs))
            .materialize_all(&registry, "/out/pkg", &OverrideSet::empty())
            .unwrap_err();

        let ids: Vec<&str> = failure.completed.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["readme", "post-create"]);
        assert_eq!(failure.completed.outcomes()[1].action, WriteAction::Created);
        assert!(matches!(
            failure.error,
            WizardError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn preview_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let report = ScaffoldService::new(Box::new(fs)).preview(
            &registry(),
            "/out/pkg",
            &OverrideSet::empty(),
        );

        assert_eq!(report.len(), 2);
        assert_eq!(report.created_count(), 2);
        assert_eq!(
            report.outcomes()[1].path,
            PathBuf::from("/out/pkg/README.md")
        );
    }
}
