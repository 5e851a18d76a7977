//! Filesystem-backed store.

use std::path::Path;

use super::FileStore;
use crate::errors::StoreError;

/// Production store reading and writing the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl DiskStore {
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for DiskStore {
    fn read_to_string(&self, path: &Path) -> Result<String, StoreError> {
        std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        std::fs::write(path, contents).map_err(|e| StoreError::io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), StoreError> {
        std::fs::create_dir_all(path).map_err(|e| StoreError::io(path, e))
    }
}
