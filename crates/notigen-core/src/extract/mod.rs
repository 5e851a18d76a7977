//! Extraction subsystem: best-effort scanners over entity source text.
//!
//! Two independent leaves feed the rest of the pipeline:
//! - [`fields`]: promoted field declarations and their declared types
//! - [`doc_types`]: `@param` doc-block type expressions
//!
//! [`entity`] combines both into an [`EntityDescriptor`] together with the
//! declaring namespace, the existing `use` set, and the notify marker.

mod doc_types;
mod entity;
mod fields;

pub use doc_types::{DocTypeScanner, ParamDoc};
pub use entity::{EntityDescriptor, NOTIFY_MARKER};
pub use fields::{FieldDescriptor, FieldScanner};
