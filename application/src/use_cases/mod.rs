//! Use cases
//!
//! Application-level operations that drive the schema model.

pub mod load_config;
pub mod save_config;
