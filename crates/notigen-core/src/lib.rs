//! notigen-core: entity notifier scaffolding engine
//!
//! Given the source of a PHP entity class that declares its state through
//! constructor-promoted properties, this crate generates the companion
//! notification artifacts and patches the entity itself:
//! - Extract: promoted field declarations and `@param` doc types
//! - Resolve: the deduplicated `use` set each generated artifact needs
//! - Render: the data-carrier class and its interface contract
//! - Patch: idempotent injection of a `notify()` method into the entity
//! - Store: file persistence behind an injectable capability trait
//! - Pipeline: single-shot orchestration of the stages above

pub mod config;
pub mod errors;
pub mod extract;
pub mod patch;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod store;
pub mod telemetry;

// Re-exports for convenience
pub use config::{CliOverrides, LayoutConfig, NotigenConfig};
pub use errors::{ConfigError, GenerateError, StoreError};
pub use extract::{EntityDescriptor, FieldDescriptor, ParamDoc};
pub use pipeline::{GenerationReport, Generator};
pub use render::{ArtifactKind, GeneratedArtifact};
pub use resolve::{ImportResolver, ImportSet};
pub use store::{ArtifactWriter, DiskStore, FileStore, MemoryStore};
pub use telemetry::init_tracing;
