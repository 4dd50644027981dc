//! The template registry: the fixed catalog of files one scaffold run produces.
//!
//! A registry is assembled once through [`TemplateRegistryBuilder`] and never
//! mutated afterwards. Construction is where programming errors in a template
//! set surface (duplicate ids, paths outside the root), so a registry that
//! exists is always safe to hand to the orchestrator.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{
        common::RelativePath,
        override_policy::OverrideSet,
        template::{FileId, TemplateEntry},
    },
    error::DomainError,
};

/// Immutable, ordered set of template entries plus the declared skeleton.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    entries: Vec<TemplateEntry>,
    directories: Vec<RelativePath>,
}

impl TemplateRegistry {
    pub fn builder() -> TemplateRegistryBuilder {
        TemplateRegistryBuilder::default()
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = &FileId> {
        self.entries.iter().map(TemplateEntry::id)
    }

    pub fn get(&self, id: &FileId) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: &FileId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Directories to create before any file is written, relative to the root.
    ///
    /// Declared directories come first, followed by the parent of every entry
    /// not already listed. Order is deterministic; duplicates are dropped.
    pub fn skeleton(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut dirs = Vec::new();

        let declared = self.directories.iter().map(RelativePath::as_path);
        let parents = self.entries.iter().filter_map(|e| e.relative_path().parent());

        for dir in declared.chain(parents) {
            if seen.insert(dir.to_path_buf()) {
                dirs.push(dir.to_path_buf());
            }
        }

        dirs
    }

    /// Fail on the first override id that names no entry in this registry.
    pub fn check_overrides(&self, overrides: &OverrideSet) -> Result<(), DomainError> {
        match overrides.iter().find(|id| !self.contains(id)) {
            Some(unknown) => Err(DomainError::UnknownFileId {
                id: unknown.to_string(),
                known: self.ids().map(FileId::to_string).collect(),
            }),
            None => Ok(()),
        }
    }
}

/// Builder for [`TemplateRegistry`].
#[derive(Debug, Default)]
pub struct TemplateRegistryBuilder {
    entries: Vec<TemplateEntry>,
    directories: Vec<PathBuf>,
}

impl TemplateRegistryBuilder {
    pub fn entry(mut self, entry: TemplateEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = TemplateEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Declare a skeleton directory that has no file of its own, or must
    /// exist regardless of which entries are present.
    pub fn directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directories.push(path.into());
        self
    }

    /// Validate and freeze the registry.
    ///
    /// # Errors
    ///
    /// - `EmptyRegistry` when no entry was added
    /// - `DuplicateTemplateId` on the first repeated id
    /// - `DuplicateTemplatePath` when two ids resolve to the same file
    /// - `AbsolutePathNotAllowed` / `PathEscapesRoot` for a bad directory
    pub fn build(self) -> Result<TemplateRegistry, DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyRegistry);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.id()) {
                return Err(DomainError::DuplicateTemplateId {
                    id: entry.id().to_string(),
                });
            }
        }

        let mut owners: HashMap<&Path, &FileId> = HashMap::new();
        for entry in &self.entries {
            if let Some(first) = owners.insert(entry.relative_path().as_path(), entry.id()) {
                return Err(DomainError::DuplicateTemplatePath {
                    path: entry.relative_path().to_string(),
                    first: first.to_string(),
                    second: entry.id().to_string(),
                });
            }
        }

        let directories = self
            .directories
            .into_iter()
            .map(RelativePath::try_new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TemplateRegistry {
            entries: self.entries,
            directories,
        })
    }
}
