//! File materializer: the single write-or-skip decision point.

use std::path::Path;

use tracing::{debug, trace};

use crate::{
    application::ports::Filesystem,
    domain::{FileId, WriteAction, WriteOutcome},
    error::WizardResult,
};

/// Writes one file, or leaves an existing one alone.
///
/// | exists | overwrite allowed | action        | writes |
/// |--------|-------------------|---------------|--------|
/// | no     | any               | `Created`     | 1      |
/// | yes    | yes               | `Overwritten` | 1      |
/// | yes    | no                | `Skipped`     | 0      |
///
/// The parent directory must already exist.
pub struct FileMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FileMaterializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Apply the write-or-skip decision for `path`.
    ///
    /// # Errors
    ///
    /// Whatever the adapter reports for the write, normally
    /// `ApplicationError::WriteFailure`. Not retried.
    pub fn materialize(
        &self,
        id: &FileId,
        path: &Path,
        content: &str,
        overwrite_allowed: bool,
    ) -> WizardResult<WriteOutcome> {
        let action = self.decide(path, overwrite_allowed);

        if action.is_created() {
            self.filesystem.write_file(path, content)?;
            debug!(id = %id, path = %path.display(), %action, bytes = content.len(), "file written");
        } else {
            debug!(id = %id, path = %path.display(), "file exists, skipped");
        }

        Ok(WriteOutcome::new(id.clone(), path, action))
    }

    /// The outcome [`Self::materialize`] would produce, without writing.
    pub fn predict(&self, id: &FileId, path: &Path, overwrite_allowed: bool) -> WriteOutcome {
        WriteOutcome::new(id.clone(), path, self.decide(path, overwrite_allowed))
    }

    fn decide(&self, path: &Path, overwrite_allowed: bool) -> WriteAction {
        let exists = self.filesystem.exists(path);
        trace!(path = %path.display(), exists, overwrite_allowed, "deciding");

        match (exists, overwrite_allowed) {
            (false, _) => WriteAction::Created,
            (true, true) => WriteAction::Overwritten,
            (true, false) => WriteAction::Skipped,
        }
    }
}
