//! Template entries: one logical file the tool can produce.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{
    entities::common::{Permissions, RelativePath},
    error::DomainError,
};

/// Logical identifier of a generated file (`gitignore`, `setup`, ...).
///
/// This is the only identifier space overrides are matched against. Two
/// registries may place different ids at the same path, but an id is unique
/// within one registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One registered file: where it goes and what it contains.
///
/// Content is fully rendered before the entry is created; the materializer
/// writes it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    id: FileId,
    relative_path: RelativePath,
    content: String,
    permissions: Permissions,
}

impl TemplateEntry {
    /// Create an entry with default (read-write) permissions.
    ///
    /// # Errors
    ///
    /// - `InvalidFileId` if the id is blank or contains whitespace
    /// - `AbsolutePathNotAllowed` / `PathEscapesRoot` for paths that would
    ///   land outside the package root
    pub fn new(
        id: impl Into<FileId>,
        relative_path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if id.0.trim().is_empty() || id.0.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidFileId(id.0));
        }

        Ok(Self {
            id,
            relative_path: RelativePath::try_new(relative_path)?,
            content: content.into(),
            permissions: Permissions::default(),
        })
    }

    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn id(&self) -> &FileId {
        &self.id
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn permissions(&self) -> Permissions {
        self.permissions
    }
}
