//! Pipeline errors.

use super::{ConfigError, StoreError};

/// Errors that can abort a generation run.
/// Aggregates subsystem errors via `From` conversions.
///
/// Both `MissingSource` and `NoFields` are raised before anything is
/// written, so a run that fails with either leaves the tree untouched.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Entity source not found at {path}")]
    MissingSource { path: String },

    #[error("No promoted field declarations found in {class_name}")]
    NoFields { class_name: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
