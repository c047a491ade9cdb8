//! Application layer for rdesk-config
//!
//! This crate contains the load/save use cases and the port they use to
//! reach the text reader/writer. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::config_store::ConfigStore;
pub use use_cases::load_config::{LoadConfigUseCase, LoadSummary, apply_document};
pub use use_cases::save_config::{SaveConfigUseCase, render_document};
