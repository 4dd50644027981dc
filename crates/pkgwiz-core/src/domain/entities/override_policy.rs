//! Override policy: which existing files the caller wants rewritten.

use std::collections::BTreeSet;

use crate::domain::entities::template::FileId;

/// Set of file ids the caller explicitly wants overwritten.
///
/// Read-only for the duration of a run. Ordered so that iteration (and thus
/// error reporting) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSet {
    ids: BTreeSet<FileId>,
}

impl OverrideSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FileId>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with(mut self, id: impl Into<FileId>) -> Self {
        self.ids.insert(id.into());
        self
    }

    pub fn contains(&self, id: &FileId) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<FileId>> FromIterator<S> for OverrideSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_ids(iter)
    }
}

/// `true` iff `id` is a member of `overrides`.
pub fn should_overwrite(id: &FileId, overrides: &OverrideSet) -> bool {
    overrides.contains(id)
}
