//! File store errors.

/// Errors raised by a [`FileStore`](crate::store::FileStore) implementation.
///
/// Filesystem failures (permission denied, disk full) surface here and
/// propagate unrecovered; the pipeline performs no partial-write rollback.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Wrap an I/O error with the path it occurred at.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
