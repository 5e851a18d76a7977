//! Data-carrier class renderer.

use crate::config::LayoutConfig;
use crate::extract::EntityDescriptor;
use crate::resolve::ImportSet;

use super::{setter_doc_type, setter_name, use_block};

/// Renders the carrier class: mirrored private fields, one setter per
/// field, and a `build()` method returning a populated copy.
pub struct CarrierRenderer<'a> {
    layout: &'a LayoutConfig,
}

impl<'a> CarrierRenderer<'a> {
    pub fn new(layout: &'a LayoutConfig) -> Self {
        Self { layout }
    }

    /// Render the carrier source. `imports` must already contain the
    /// interface's fully-qualified name.
    pub fn render(
        &self,
        class_name: &str,
        entity: &EntityDescriptor,
        imports: &ImportSet,
    ) -> String {
        let carrier = self.layout.carrier_name(class_name);
        let interface = self.layout.interface_name(class_name);

        let mut out = String::new();
        out.push_str("<?php\n\n");
        out.push_str(&format!("namespace {};\n\n", self.layout.carrier_namespace));
        out.push_str(&use_block(imports));
        out.push_str("/**\n");
        out.push_str(&format!(" * {carrier}\n"));
        out.push_str(" *\n");
        out.push_str(" * Notification object carrying an entity's private state. The entity\n");
        out.push_str(" * fills an instance through its notify() method, so its properties\n");
        out.push_str(" * stay private while repositories still receive their values.\n");
        out.push_str(" */\n");
        out.push_str(&format!("class {carrier} implements {interface}\n{{\n"));

        for field in &entity.fields {
            out.push_str(&format!(
                "    private {} ${};\n",
                field.declared_type, field.name
            ));
        }
        out.push('\n');

        for field in &entity.fields {
            out.push_str(&format!(
                "    /**\n     * @param {} ${}\n     */\n",
                setter_doc_type(field),
                field.name
            ));
            out.push_str(&format!(
                "    public function {}({} ${}): void\n    {{\n        $this->{} = ${};\n    }}\n\n",
                setter_name(&field.name),
                field.declared_type,
                field.name,
                field.name,
                field.name
            ));
        }

        out.push_str(&format!(
            "    public function build(): {carrier}\n    {{\n        $builder = new {carrier}();\n"
        ));
        for field in &entity.fields {
            out.push_str(&format!(
                "        $builder->{}($this->{});\n",
                setter_name(&field.name),
                field.name
            ));
        }
        out.push_str("\n        return $builder;\n    }\n}\n");

        out
    }
}
