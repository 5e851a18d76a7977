//! Error handling for notigen.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod generate_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use generate_error::GenerateError;
pub use store_error::StoreError;
