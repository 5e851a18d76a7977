//! Output layout: where entities live and where generated artifacts go.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Filesystem and namespace conventions for one project.
///
/// Directories are relative to the project root passed to the pipeline.
/// Defaults mirror the Laravel-style layout the generator was built for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Directory containing entity sources.
    pub entities_dir: String,
    /// Directory receiving generated carrier classes.
    pub carrier_dir: String,
    /// Directory receiving generated interfaces.
    pub interface_dir: String,
    /// Namespace of generated carrier classes.
    pub carrier_namespace: String,
    /// Namespace of generated interfaces.
    pub interface_namespace: String,
    /// Suffix appended to the entity class name for the carrier.
    pub carrier_suffix: String,
    /// Suffix appended to the entity class name for the interface.
    pub interface_suffix: String,
    /// Source file extension, without the leading dot.
    pub extension: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            entities_dir: "app/Packages/Domain/Entities".to_string(),
            carrier_dir: "app/Packages/Notification/Class".to_string(),
            interface_dir: "app/Packages/Notification/Interface".to_string(),
            carrier_namespace: "App\\Packages\\Notification\\Class".to_string(),
            interface_namespace: "App\\Packages\\Notification\\Interface".to_string(),
            carrier_suffix: "DataModelBuilder".to_string(),
            interface_suffix: "NotifierInterface".to_string(),
            extension: "php".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Carrier class name for an entity, e.g. `Engineer` -> `EngineerDataModelBuilder`.
    pub fn carrier_name(&self, class_name: &str) -> String {
        format!("{}{}", class_name, self.carrier_suffix)
    }

    /// Interface name for an entity, e.g. `Engineer` -> `EngineerNotifierInterface`.
    pub fn interface_name(&self, class_name: &str) -> String {
        format!("{}{}", class_name, self.interface_suffix)
    }

    /// Fully-qualified carrier name, used in the interface's import set.
    pub fn carrier_fqn(&self, class_name: &str) -> String {
        format!("{}\\{}", self.carrier_namespace, self.carrier_name(class_name))
    }

    /// Fully-qualified interface name, used in the carrier's import set and
    /// in the injected `use` statement.
    pub fn interface_fqn(&self, class_name: &str) -> String {
        format!(
            "{}\\{}",
            self.interface_namespace,
            self.interface_name(class_name)
        )
    }

    /// Input path of the entity source.
    pub fn entity_path(&self, root: &Path, class_name: &str) -> PathBuf {
        root.join(&self.entities_dir)
            .join(format!("{}.{}", class_name, self.extension))
    }

    /// Output path of the generated carrier class.
    pub fn carrier_path(&self, root: &Path, class_name: &str) -> PathBuf {
        root.join(&self.carrier_dir)
            .join(format!("{}.{}", self.carrier_name(class_name), self.extension))
    }

    /// Output path of the generated interface.
    pub fn interface_path(&self, root: &Path, class_name: &str) -> PathBuf {
        root.join(&self.interface_dir).join(format!(
            "{}.{}",
            self.interface_name(class_name),
            self.extension
        ))
    }
}
