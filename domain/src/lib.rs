//! Domain layer for rdesk-config
//!
//! This crate contains the configuration schema model, the validation
//! primitives, the per-role settings records and the shortcut bindings.
//! It has no dependencies on file I/O or logging.
//!
//! # Core Concepts
//!
//! ## Schema
//!
//! - **Field Descriptor**: binds one key to its load/save behavior
//! - **Section Descriptor**: named group of fields, optionally with one
//!   wildcard field that claims every other key
//! - **Schema**: ordered sections for one role (client or server)
//!
//! ## Shortcuts
//!
//! The server's `[Shortcuts]` section is handled by a wildcard field that
//! turns `ActionName = Hotkey` entries into bound [`ShortcutBinding`]s.

pub mod config;
pub mod limits;
pub mod settings;
pub mod shortcut;
pub mod util;

// Re-export commonly used types
pub use config::{
    ConfigError, FieldDescriptor, FieldKind, IniDocument, IniEntry, IniSection, Result, Schema,
    SectionDescriptor,
};
pub use settings::{ClientSettings, Orientation, Role, ServerSettings};
pub use shortcut::{Action, Hotkey, HotkeyParseError, ShortcutBinding, ShortcutList};
