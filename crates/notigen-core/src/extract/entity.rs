//! Entity descriptor: everything the pipeline needs from one source file.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{DocTypeScanner, FieldDescriptor, FieldScanner, ParamDoc};
use crate::resolve::ImportSet;

/// Fixed signature marker used for idempotent notify injection.
pub const NOTIFY_MARKER: &str = "public function notify(";

static NAMESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^namespace\s+([A-Za-z0-9_\\]+);").unwrap());

static USE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^use\s+([A-Za-z0-9_\\]+);").unwrap());

/// Descriptor of one entity source file.
///
/// Built once per generation run from the raw source text and never
/// mutated; regeneration re-derives it from the store.
#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    /// Declaring namespace, or empty when none could be determined.
    pub namespace: String,
    /// Existing top-level `use` statements, in source order.
    pub imports: ImportSet,
    /// Ordered field set, documented types merged in.
    pub fields: Vec<FieldDescriptor>,
    /// Raw `@param` associations in source order, duplicates included.
    pub param_docs: Vec<ParamDoc>,
    /// Whether the notify marker is already present.
    pub has_notify_method: bool,
}

impl EntityDescriptor {
    /// Derive a descriptor from entity source text.
    pub fn from_source(source: &str) -> Self {
        let namespace = NAMESPACE_REGEX
            .captures(source)
            .map(|cap| cap[1].to_string())
            .unwrap_or_default();

        let mut imports = ImportSet::new();
        for cap in USE_REGEX.captures_iter(source) {
            imports.insert(&cap[1]);
        }

        let param_docs = DocTypeScanner::scan(source);
        let mut fields = FieldScanner::scan(source);
        let documented = DocTypeScanner::first_per_name(&param_docs);
        for field in &mut fields {
            field.documented_type = documented
                .iter()
                .find(|(name, _)| *name == field.name)
                .map(|(_, expr)| expr.to_string());
        }

        let has_notify_method = source.contains(NOTIFY_MARKER);

        Self {
            namespace,
            imports,
            fields,
            param_docs,
            has_notify_method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"<?php

namespace App\Packages\Domain\Entities;

use App\Packages\Domain\Entities\Values\ImageUrl;
use Carbon\Carbon;

/**
 * Engineer Entity.
 */
class Engineer
{
    /**
     * @param Certification[]|null $certifications
     */
    public function __construct(
        private string $first_name,
        private Carbon $birth_date,
        private ?ImageUrl $image_url,
        private ?array $certifications,
    ) {
    }
}
"#;

    #[test]
    fn extracts_namespace_imports_and_fields() {
        let entity = EntityDescriptor::from_source(SOURCE);
        assert_eq!(entity.namespace, "App\\Packages\\Domain\\Entities");
        assert_eq!(
            entity.imports.iter().collect::<Vec<_>>(),
            vec![
                "App\\Packages\\Domain\\Entities\\Values\\ImageUrl",
                "Carbon\\Carbon"
            ]
        );
        assert_eq!(entity.fields.len(), 4);
        assert!(!entity.has_notify_method);
    }

    #[test]
    fn merges_documented_types_into_fields() {
        let entity = EntityDescriptor::from_source(SOURCE);
        let certifications = entity
            .fields
            .iter()
            .find(|f| f.name == "certifications")
            .unwrap();
        assert_eq!(
            certifications.documented_type.as_deref(),
            Some("Certification[]|null")
        );
        let first_name = entity.fields.iter().find(|f| f.name == "first_name").unwrap();
        assert_eq!(first_name.documented_type, None);
    }

    #[test]
    fn missing_namespace_falls_back_to_empty() {
        let entity = EntityDescriptor::from_source("<?php class A {}");
        assert_eq!(entity.namespace, "");
    }

    #[test]
    fn detects_existing_notify_method() {
        let source = format!("{SOURCE}\n// patched\n");
        assert!(!EntityDescriptor::from_source(&source).has_notify_method);
        let patched = SOURCE.replace(
            "    ) {\n    }",
            "    ) {\n    }\n\n    public function notify(EngineerNotifierInterface $note): void\n    {\n    }",
        );
        assert!(EntityDescriptor::from_source(&patched).has_notify_method);
    }

    #[test]
    fn indented_use_statements_are_not_imports() {
        let source = "<?php\nnamespace A;\nclass B {\n    use SomeTrait;\n}\n";
        let entity = EntityDescriptor::from_source(source);
        assert_eq!(entity.imports.iter().count(), 0);
    }
}
