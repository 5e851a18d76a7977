//! Import resolution for generated artifacts.

use rustc_hash::FxHashSet;

use crate::config::LayoutConfig;
use crate::extract::EntityDescriptor;

/// Primitive and builtin type names that never need an import.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "int", "float", "string", "bool", "array", "object", "null", "mixed",
];

/// Ordered set of fully-qualified names, deduplicated by canonical
/// (last-segment) name. On a canonical collision the first entry silently
/// wins.
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    names: Vec<String>,
    canonical: FxHashSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-qualified name. Returns false when an entry with the
    /// same canonical name is already present.
    pub fn insert(&mut self, fqn: &str) -> bool {
        let canonical = canonical_name(fqn);
        if !self.canonical.insert(canonical.to_string()) {
            return false;
        }
        self.names.push(fqn.to_string());
        true
    }

    /// Whether any entry's canonical name equals `name`.
    pub fn contains_canonical(&self, name: &str) -> bool {
        self.canonical.contains(name)
    }

    /// Iterate fully-qualified names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

/// Final segment of a qualified name, used for import deduplication.
pub fn canonical_name(fqn: &str) -> &str {
    fqn.rsplit('\\').next().unwrap_or(fqn)
}

/// Produces the deduplicated import list a generated artifact requires.
pub struct ImportResolver<'a> {
    layout: &'a LayoutConfig,
}

impl<'a> ImportResolver<'a> {
    pub fn new(layout: &'a LayoutConfig) -> Self {
        Self { layout }
    }

    /// Resolve the base import set for one entity:
    ///
    /// 1. Existing imports, minus anything under the generator's interface
    ///    namespace (prevents accumulation across repeated runs).
    /// 2. Each documented type expression split on `|`, array markers
    ///    stripped.
    /// 3. Primitives skipped; qualified names kept verbatim; bare names
    ///    qualified with the entity's own namespace.
    /// 4. Deduplicated by canonical name, first-seen order.
    pub fn resolve(&self, entity: &EntityDescriptor) -> ImportSet {
        let mut imports = ImportSet::new();
        let interface_prefix = format!("{}\\", self.layout.interface_namespace);

        for fqn in entity.imports.iter() {
            if fqn.starts_with(&interface_prefix) {
                continue;
            }
            imports.insert(fqn);
        }

        for doc in &entity.param_docs {
            for member in doc.type_expr.split('|') {
                let member = member.replace("[]", "");
                if member.is_empty() || PRIMITIVE_TYPES.contains(&member.as_str()) {
                    continue;
                }
                if member.contains('\\') {
                    imports.insert(member.trim_start_matches('\\'));
                    continue;
                }
                if imports.contains_canonical(&member) {
                    continue;
                }
                if entity.namespace.is_empty() {
                    // Best-effort qualification; see the documented
                    // limitation on ambient namespace fallback.
                    tracing::warn!(
                        type_name = %member,
                        "entity namespace unknown, importing bare name"
                    );
                    imports.insert(&member);
                } else {
                    imports.insert(&format!("{}\\{}", entity.namespace, member));
                }
            }
        }

        imports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::EntityDescriptor;

    fn resolve(source: &str) -> Vec<String> {
        let layout = LayoutConfig::default();
        let entity = EntityDescriptor::from_source(source);
        ImportResolver::new(&layout)
            .resolve(&entity)
            .iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn canonical_name_is_last_segment() {
        assert_eq!(canonical_name("App\\Domain\\User"), "User");
        assert_eq!(canonical_name("User"), "User");
    }

    #[test]
    fn import_set_keeps_first_on_canonical_collision() {
        let mut set = ImportSet::new();
        assert!(set.insert("App\\A\\User"));
        assert!(!set.insert("App\\B\\User"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["App\\A\\User"]);
    }

    #[test]
    fn primitives_are_never_imported() {
        let source = r#"<?php
namespace App\Domain;

/**
 * @param int|null    $a
 * @param string      $b
 * @param mixed       $c
 */
class X {}
"#;
        assert!(resolve(source).is_empty());
    }

    #[test]
    fn bare_names_are_qualified_with_the_entity_namespace() {
        let source = r#"<?php
namespace App\Domain;

/**
 * @param Certification[]|null $certifications
 */
class X {}
"#;
        assert_eq!(resolve(source), vec!["App\\Domain\\Certification"]);
    }

    #[test]
    fn qualified_names_are_kept_verbatim() {
        let source = r#"<?php
namespace App\Domain;

/**
 * @param \Carbon\Carbon $date
 */
class X {}
"#;
        assert_eq!(resolve(source), vec!["Carbon\\Carbon"]);
    }

    #[test]
    fn documented_type_matching_existing_import_is_not_duplicated() {
        let source = r#"<?php
namespace App\Domain;

use Other\Package\Certification;

/**
 * @param Certification[]|null $certifications
 */
class X {}
"#;
        assert_eq!(resolve(source), vec!["Other\\Package\\Certification"]);
    }

    #[test]
    fn previously_injected_interface_import_is_excluded() {
        let source = r#"<?php
namespace App\Domain;

use App\Packages\Notification\Interface\XNotifierInterface;
use Carbon\Carbon;

class X {}
"#;
        assert_eq!(resolve(source), vec!["Carbon\\Carbon"]);
    }

    #[test]
    fn missing_namespace_degrades_to_bare_import() {
        let source = r#"<?php
/**
 * @param Certification $c
 */
class X {}
"#;
        assert_eq!(resolve(source), vec!["Certification"]);
    }
}
