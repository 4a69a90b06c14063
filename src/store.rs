//! File store backing the `/files/` routes.
//!
//! All names are resolved relative to a single root directory fixed at
//! startup. Reads and writes go straight to `std::fs`; there is no locking,
//! so two concurrent writes to the same name race and the file ends up with
//! whichever content the OS applied last (possibly interleaved).

use std::io;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid file name: {0:?}")]
    InvalidName(String),
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `name` onto the root.
    ///
    /// Only plain relative segments are accepted: empty names, absolute
    /// paths and `.`/`..` segments are rejected so a name can never point
    /// outside the root.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, StoreError> {
        let relative = Path::new(name);
        let mut components = relative.components().peekable();

        if components.peek().is_none() {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        if !components.all(|c| matches!(c, Component::Normal(_))) {
            return Err(StoreError::InvalidName(name.to_string()));
        }

        Ok(self.root.join(relative))
    }

    pub fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(name)?;
        std::fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(path),
            _ => StoreError::Io(e),
        })
    }

    /// Creates or truncates `name` and writes `contents` verbatim.
    pub fn write(&self, name: &str, contents: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(name)?;
        std::fs::write(&path, contents)?;
        Ok(())
    }
}
