//! Code rendering for the generated artifacts.
//!
//! Both renderers are pure functions of the entity descriptor and the
//! resolved import set: the same input always yields byte-identical output.

mod carrier;
mod interface;

pub use carrier::CarrierRenderer;
pub use interface::InterfaceRenderer;

use std::path::PathBuf;

use serde::Serialize;

use crate::extract::FieldDescriptor;
use crate::resolve::ImportSet;

/// Which artifact a rendered text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Carrier,
    Interface,
}

/// A rendered artifact awaiting persistence. Immutable once rendered; the
/// writer's only job is to put `source_text` at `target_path`.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub source_text: String,
    pub target_path: PathBuf,
}

/// StudlyCase of a snake_case name: `first_name` -> `FirstName`.
pub(crate) fn studly_case(name: &str) -> String {
    name.split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Setter method name for a field: `first_name` -> `setFirstName`.
pub(crate) fn setter_name(field: &str) -> String {
    format!("set{}", studly_case(field))
}

/// `use X;` lines followed by a blank line, or nothing when empty.
pub(crate) fn use_block(imports: &ImportSet) -> String {
    let mut block = String::new();
    for fqn in imports.iter() {
        block.push_str(&format!("use {};\n", fqn));
    }
    if !block.is_empty() {
        block.push('\n');
    }
    block
}

/// Doc annotation for a setter: the documented type when present, the
/// declared type otherwise.
pub(crate) fn setter_doc_type(field: &FieldDescriptor) -> &str {
    field
        .documented_type
        .as_deref()
        .unwrap_or(&field.declared_type)
}
