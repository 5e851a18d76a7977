//! Idempotent notify-method injection into entity source.
//!
//! The patch is computed as read, transform, write-once: detection of the
//! fixed signature marker, import insertion after the namespace
//! declaration, and splicing of the method before the class's final
//! closing brace. When the marker is present the source is left untouched,
//! even when the field set has since evolved; the method is never
//! regenerated (documented limitation).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::LayoutConfig;
use crate::extract::{FieldDescriptor, NOTIFY_MARKER};
use crate::render::setter_name;

static NAMESPACE_DECL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"namespace\s+[^;]+;").unwrap());

static FINAL_BRACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\}\s*\z").unwrap());

/// Injects `notify()` into an entity class.
pub struct NotifyInjector<'a> {
    layout: &'a LayoutConfig,
}

impl<'a> NotifyInjector<'a> {
    pub fn new(layout: &'a LayoutConfig) -> Self {
        Self { layout }
    }

    /// Compute the patched entity source, or `None` when the notify marker
    /// is already present and the file must be left untouched.
    pub fn inject(
        &self,
        source: &str,
        class_name: &str,
        fields: &[FieldDescriptor],
    ) -> Option<String> {
        if source.contains(NOTIFY_MARKER) {
            tracing::debug!(class_name, "notify method already present, leaving source untouched");
            return None;
        }

        let interface = self.layout.interface_name(class_name);
        let use_line = format!("use {};", self.layout.interface_fqn(class_name));

        let mut content = source.to_string();
        if !content.contains(&use_line) {
            content = NAMESPACE_DECL_REGEX
                .replace(&content, format!("$0\n{use_line}").as_str())
                .into_owned();
        }

        let mut method = String::new();
        method.push_str("\n    /**\n");
        method.push_str("     * Passes the entity's private state to the given notifier.\n");
        method.push_str("     *\n");
        method.push_str(&format!("     * @param {interface} $note\n"));
        method.push_str("     * @return void\n");
        method.push_str("     */\n");
        method.push_str(&format!(
            "    public function notify({interface} $note): void\n    {{\n"
        ));
        for field in fields {
            method.push_str(&format!(
                "        $note->{}($this->{});\n",
                setter_name(&field.name),
                field.name
            ));
        }
        method.push_str("    }\n}\n");

        let patched = FINAL_BRACE_REGEX
            .replace(&content, method.replace('$', "$$").as_str())
            .into_owned();

        Some(patched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::EntityDescriptor;

    const SOURCE: &str = r#"<?php

namespace App\Packages\Domain\Entities;

use Carbon\Carbon;

class Player
{
    public function __construct(
        private string $name,
        private ?int $score,
    ) {
    }
}
"#;

    fn inject(source: &str) -> Option<String> {
        let layout = LayoutConfig::default();
        let entity = EntityDescriptor::from_source(source);
        NotifyInjector::new(&layout).inject(source, "Player", &entity.fields)
    }

    #[test]
    fn injects_method_and_import() {
        let patched = inject(SOURCE).unwrap();
        assert!(patched.contains(
            "namespace App\\Packages\\Domain\\Entities;\nuse App\\Packages\\Notification\\Interface\\PlayerNotifierInterface;"
        ));
        assert!(patched.contains(
            "    public function notify(PlayerNotifierInterface $note): void\n    {\n        $note->setName($this->name);\n        $note->setScore($this->score);\n    }\n}\n"
        ));
        assert!(patched.ends_with("    }\n}\n"));
    }

    #[test]
    fn injection_is_idempotent() {
        let once = inject(SOURCE).unwrap();
        assert_eq!(inject(&once), None);
        // One method, one import.
        assert_eq!(once.matches("public function notify(").count(), 1);
        assert_eq!(
            once.matches("use App\\Packages\\Notification\\Interface\\PlayerNotifierInterface;")
                .count(),
            1
        );
    }

    #[test]
    fn existing_import_is_not_duplicated() {
        let source = SOURCE.replace(
            "use Carbon\\Carbon;",
            "use App\\Packages\\Notification\\Interface\\PlayerNotifierInterface;\nuse Carbon\\Carbon;",
        );
        let patched = inject(&source).unwrap();
        assert_eq!(
            patched
                .matches("use App\\Packages\\Notification\\Interface\\PlayerNotifierInterface;")
                .count(),
            1
        );
    }

    #[test]
    fn calls_follow_field_declaration_order() {
        let patched = inject(SOURCE).unwrap();
        let name_at = patched.find("$note->setName($this->name);").unwrap();
        let score_at = patched.find("$note->setScore($this->score);").unwrap();
        assert!(name_at < score_at);
    }

    #[test]
    fn method_is_spliced_before_the_final_closing_brace() {
        let patched = inject(SOURCE).unwrap();
        let constructor_close = patched.find("    ) {\n    }").unwrap();
        let notify_at = patched.find("public function notify(").unwrap();
        assert!(notify_at > constructor_close);
        // Nothing but the class brace follows the method.
        let after = &patched[notify_at..];
        assert!(after.ends_with("    }\n}\n"));
    }
}
