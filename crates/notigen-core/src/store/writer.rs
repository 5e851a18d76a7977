//! Artifact persistence.

use super::FileStore;
use crate::errors::StoreError;
use crate::render::GeneratedArtifact;

/// Persists rendered artifacts: ensures the output directory exists and
/// overwrites any existing file unconditionally. Regeneration is a full
/// replace for the two generated artifacts; only the entity source is
/// patched incrementally.
pub struct ArtifactWriter<'a, S: FileStore> {
    store: &'a S,
}

impl<'a, S: FileStore> ArtifactWriter<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn persist(&self, artifact: &GeneratedArtifact) -> Result<(), StoreError> {
        if let Some(dir) = artifact.target_path.parent() {
            self.store.create_dir_all(dir)?;
        }
        self.store.write(&artifact.target_path, &artifact.source_text)?;
        tracing::info!(
            kind = ?artifact.kind,
            path = %artifact.target_path.display(),
            "artifact written"
        );
        Ok(())
    }
}
