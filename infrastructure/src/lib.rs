//! Infrastructure layer for rdesk-config
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the config text reader/writer, the
//! file-backed store and the per-role config loader.

pub mod config;
pub mod ini;

// Re-export commonly used types
pub use config::ConfigLoader;
pub use ini::{IniFileStore, parse_document, render_text};
