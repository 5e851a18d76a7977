//! In-memory store for side-effect-free tests and embedding.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::FileStore;
use crate::errors::StoreError;

/// Store keeping all files in a map. Directories are tracked only so that
/// `exists` and `create_dir_all` behave consistently with a real tree.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, String>>,
    dirs: Mutex<Vec<PathBuf>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating it at `path`.
    pub fn seed(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), contents.into());
    }

    /// Number of files currently stored.
    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl FileStore for MemoryStore {
    fn read_to_string(&self, path: &Path) -> Result<String, StoreError> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                StoreError::io(path, io::Error::new(io::ErrorKind::NotFound, "no such file"))
            })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
            || self.dirs.lock().unwrap().iter().any(|d| d == path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), StoreError> {
        let mut dirs = self.dirs.lock().unwrap();
        if !dirs.iter().any(|d| d == path) {
            dirs.push(path.to_path_buf());
        }
        Ok(())
    }
}
