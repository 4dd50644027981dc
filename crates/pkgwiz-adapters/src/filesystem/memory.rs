//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use pkgwiz_core::{
    application::{ApplicationError, ports::Filesystem},
    error::WizardResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can hand one clone to the
/// service and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
    failing_dirs: HashSet<PathBuf>,
    write_count: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its ancestors) without counting it as a write.
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.write_guard();
        if let Some(parent) = path.parent() {
            insert_ancestors(&mut inner.directories, parent);
        }
        inner.files.insert(path, content.into());
    }

    /// Make every later write to `path` fail with `WriteFailure`.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        self.write_guard().failing_writes.insert(path.into());
    }

    /// Make `create_dir_all` fail for `path` with `DirectoryCreationFailure`.
    pub fn fail_directory(&self, path: impl Into<PathBuf>) {
        self.write_guard().failing_dirs.insert(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read_guard().files.get(path).cloned()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.read_guard().executables.contains(path)
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.read_guard().directories.contains(path)
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read_guard().files.keys().cloned().collect()
    }

    /// Number of successful `write_file` calls since creation.
    pub fn write_count(&self) -> usize {
        self.read_guard().write_count
    }

    // A poisoned lock only happens after a panic in another test thread;
    // the data is still usable for inspection.
    fn read_guard(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_mut(&self) -> WizardResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> WizardResult<()> {
        let mut inner = self.lock_mut()?;

        if inner.failing_dirs.contains(path) {
            return Err(ApplicationError::DirectoryCreationFailure {
                path: path.to_path_buf(),
                reason: "injected failure".into(),
            }
            .into());
        }
        if inner.files.contains_key(path) {
            return Err(ApplicationError::DirectoryCreationFailure {
                path: path.to_path_buf(),
                reason: "a file exists at this path".into(),
            }
            .into());
        }

        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> WizardResult<()> {
        let mut inner = self.lock_mut()?;

        let fail = |reason: &str| -> WizardResult<()> {
            Err(ApplicationError::WriteFailure {
                path: path.to_path_buf(),
                reason: reason.into(),
            }
            .into())
        };

        if inner.failing_writes.contains(path) {
            return fail("injected failure");
        }
        if inner.directories.contains(path) {
            return fail("is a directory");
        }
        let parent_missing = path
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty() && !inner.directories.contains(p));
        if parent_missing {
            return fail("parent directory does not exist");
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.write_count += 1;
        Ok(())
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> WizardResult<()> {
        let mut inner = self.lock_mut()?;

        if !inner.files.contains_key(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into());
        }

        if executable {
            inner.executables.insert(path.to_path_buf());
        } else {
            inner.executables.remove(path);
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read_guard();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}
