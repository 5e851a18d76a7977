//! Configuration for notigen.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod layout;
pub mod notigen_config;

pub use layout::LayoutConfig;
pub use notigen_config::{CliOverrides, NotigenConfig};
