//! Per-file outcomes and the run report.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::template::FileId;

/// What the materializer did with one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteAction {
    /// File did not exist and was written.
    Created,
    /// File existed, was in the override set, and was rewritten in full.
    Overwritten,
    /// File existed and was left untouched.
    Skipped,
}

impl WriteAction {
    /// `true` for both fresh writes and overwrites.
    pub fn is_created(self) -> bool {
        matches!(self, Self::Created | Self::Overwritten)
    }
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Overwritten => write!(f, "overwritten"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    pub id: FileId,
    pub path: PathBuf,
    pub action: WriteAction,
}

impl WriteOutcome {
    pub fn new(id: impl Into<FileId>, path: impl Into<PathBuf>, action: WriteAction) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            action,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Outcomes of one run, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    outcomes: Vec<WriteOutcome>,
}

impl ScaffoldReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: WriteOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[WriteOutcome] {
        &self.outcomes
    }

    pub fn iter(&self) -> impl Iterator<Item = &WriteOutcome> {
        self.outcomes.iter()
    }

    pub fn get(&self, id: &FileId) -> Option<&WriteOutcome> {
        self.outcomes.iter().find(|o| &o.id == id)
    }

    pub fn created_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.action.is_created()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.action == WriteAction::Skipped)
            .count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn into_outcomes(self) -> Vec<WriteOutcome> {
        self.outcomes
    }
}
