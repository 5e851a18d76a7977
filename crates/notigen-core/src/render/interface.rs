//! Notifier interface renderer.

use crate::config::LayoutConfig;
use crate::extract::EntityDescriptor;
use crate::resolve::ImportSet;

use super::{setter_doc_type, setter_name, use_block};

/// Renders the carrier's public contract: one setter signature per field
/// and a `build()` signature returning the carrier type.
pub struct InterfaceRenderer<'a> {
    layout: &'a LayoutConfig,
}

impl<'a> InterfaceRenderer<'a> {
    pub fn new(layout: &'a LayoutConfig) -> Self {
        Self { layout }
    }

    /// Render the interface source. `imports` must already contain the
    /// carrier's fully-qualified name.
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
        out.push_str(&format!(
            "namespace {};\n\n",
            self.layout.interface_namespace
        ));
        out.push_str(&use_block(imports));
        out.push_str(&format!("interface {interface}\n{{\n"));

        for field in &entity.fields {
            out.push_str(&format!(
                "    /**\n     * @param {} ${}\n     */\n",
                setter_doc_type(field),
                field.name
            ));
            out.push_str(&format!(
                "    public function {}({} ${}): void;\n\n",
                setter_name(&field.name),
                field.declared_type,
                field.name
            ));
        }

        out.push_str(&format!("    public function build(): {carrier};\n}}\n"));

        out
    }
}
