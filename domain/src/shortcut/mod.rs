//! Keyboard shortcuts for the server role
//!
//! Binds dynamically named `[Shortcuts]` keys to a fixed set of actions:
//! - [`action`]: the static action table
//! - [`hotkey`]: the hotkey value and its text grammar
//! - [`binding`]: the bounded binding list filled during a load pass

pub mod action;
pub mod binding;
pub mod hotkey;

pub use action::{Action, ActionEntry, actions};
pub use binding::{SHORTCUT_VALUE_DISABLED, ShortcutBinding, ShortcutList};
pub use hotkey::{Hotkey, HotkeyParseError, Key, Modifiers, NamedKey};
