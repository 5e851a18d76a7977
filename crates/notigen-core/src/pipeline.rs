//! Single-shot generation pipeline.
//!
//! One invocation reads one entity file, runs extraction, resolution,
//! rendering, persistence, and injection in strict sequence, and
//! terminates. Nothing is cached across invocations; the generator is
//! stateless and re-entrant. Two simultaneous runs against the same entity
//! file may interleave read/write; that is an accepted limitation of a
//! developer-tool-grade generator.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::NotigenConfig;
use crate::errors::GenerateError;
use crate::extract::EntityDescriptor;
use crate::patch::NotifyInjector;
use crate::render::{ArtifactKind, CarrierRenderer, GeneratedArtifact, InterfaceRenderer};
use crate::resolve::ImportResolver;
use crate::store::{ArtifactWriter, FileStore};

/// Summary of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub class_name: String,
    pub entity_path: PathBuf,
    pub carrier_path: PathBuf,
    pub interface_path: PathBuf,
    pub field_count: usize,
    pub notify_injected: bool,
}

/// Orchestrates the pipeline stages against an injected file store.
pub struct Generator<S: FileStore> {
    store: S,
    root: PathBuf,
    config: NotigenConfig,
}

impl<S: FileStore> Generator<S> {
    pub fn new(store: S, root: impl Into<PathBuf>, config: NotigenConfig) -> Self {
        Self {
            store,
            root: root.into(),
            config,
        }
    }

    /// Generate the carrier and interface for `class_name`, and inject the
    /// entity's `notify()` method when it is absent.
    ///
    /// Fails before anything is written when the entity source is missing
    /// or declares no promoted fields. There is no rollback across the two
    /// artifact writes.
    pub fn generate(&self, class_name: &str) -> Result<GenerationReport, GenerateError> {
        let layout = &self.config.layout;
        let entity_path = layout.entity_path(&self.root, class_name);

        if !self.store.exists(&entity_path) {
            return Err(GenerateError::MissingSource {
                path: entity_path.display().to_string(),
            });
        }
        let source = self.store.read_to_string(&entity_path)?;

        let entity = EntityDescriptor::from_source(&source);
        if entity.fields.is_empty() {
            return Err(GenerateError::NoFields {
                class_name: class_name.to_string(),
            });
        }
        tracing::debug!(
            class_name,
            fields = entity.fields.len(),
            namespace = %entity.namespace,
            "entity extracted"
        );

        let resolved = ImportResolver::new(layout).resolve(&entity);

        let mut carrier_imports = resolved.clone();
        carrier_imports.insert(&layout.interface_fqn(class_name));
        let carrier = GeneratedArtifact {
            kind: ArtifactKind::Carrier,
            source_text: CarrierRenderer::new(layout).render(class_name, &entity, &carrier_imports),
            target_path: layout.carrier_path(&self.root, class_name),
        };

        let mut interface_imports = resolved;
        interface_imports.insert(&layout.carrier_fqn(class_name));
        let interface = GeneratedArtifact {
            kind: ArtifactKind::Interface,
            source_text: InterfaceRenderer::new(layout).render(
                class_name,
                &entity,
                &interface_imports,
            ),
            target_path: layout.interface_path(&self.root, class_name),
        };

        let writer = ArtifactWriter::new(&self.store);
        writer.persist(&carrier)?;
        writer.persist(&interface)?;

        let notify_injected = match NotifyInjector::new(layout).inject(
            &source,
            class_name,
            &entity.fields,
        ) {
            Some(patched) => {
                self.store.write(&entity_path, &patched)?;
                tracing::info!(path = %entity_path.display(), "notify method injected");
                true
            }
            None => false,
        };

        Ok(GenerationReport {
            class_name: class_name.to_string(),
            entity_path,
            carrier_path: carrier.target_path,
            interface_path: interface.target_path,
            field_count: entity.fields.len(),
            notify_injected,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &NotigenConfig {
        &self.config
    }
}
