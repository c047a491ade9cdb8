//! Shortcut bindings built from the `[Shortcuts]` section.
//!
//! Each key of the section names an action and each value is a hotkey
//! specification, or `None` to leave the action unbound:
//!
//! ```ini
//! [Shortcuts]
//! MoveUp = Ctrl+Alt+Up
//! ZoomIn = Ctrl+Alt+Plus
//! ResetScale = None
//! ```

use super::action::Action;
use super::hotkey::Hotkey;
use crate::config::error::{ConfigError, Result};
use crate::limits::MAX_SHORTCUTS;
use serde::{Serialize, Serializer};

/// Value that disables a shortcut without creating a binding
pub const SHORTCUT_VALUE_DISABLED: &str = "None";

/// A parsed hotkey bound to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShortcutBinding {
    pub hotkey: Hotkey,
    pub action: Action,
}

/// Append-only list of bindings with a fixed upper bound on its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutList {
    bindings: Vec<ShortcutBinding>,
    limit: usize,
}

impl Default for ShortcutList {
    fn default() -> Self {
        Self::with_limit(MAX_SHORTCUTS)
    }
}

impl ShortcutList {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            bindings: Vec::new(),
            limit,
        }
    }

    /// Maximum number of bindings this list accepts
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn as_slice(&self) -> &[ShortcutBinding] {
        &self.bindings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShortcutBinding> {
        self.bindings.iter()
    }

    /// Action bound to `hotkey`, first binding wins
    pub fn action_for(&self, hotkey: &Hotkey) -> Option<Action> {
        self.bindings
            .iter()
            .find(|b| b.hotkey == *hotkey)
            .map(|b| b.action)
    }

    /// Process one `[Shortcuts]` entry.
    ///
    /// Checks run in a fixed order: the disabled token, the length limit,
    /// the action lookup, then the hotkey parse. A binding is appended
    /// only once all of them pass. Returns `None` when the entry disables
    /// the action.
    pub fn load(&mut self, key: &str, value: &str) -> Result<Option<ShortcutBinding>> {
        if value == SHORTCUT_VALUE_DISABLED {
            return Ok(None);
        }
        if self.bindings.len() >= self.limit {
            return Err(ConfigError::ShortcutLimitExceeded { limit: self.limit });
        }

        let action = Action::from_name(key).ok_or_else(|| ConfigError::UnknownAction {
            key: key.to_string(),
            value: value.to_string(),
        })?;

        let hotkey = value
            .parse::<Hotkey>()
            .map_err(|e| ConfigError::malformed(key, value, e.to_string()))?;

        let binding = ShortcutBinding { hotkey, action };
        self.bindings.push(binding);
        Ok(Some(binding))
    }
}

impl<'a> IntoIterator for &'a ShortcutList {
    type Item = &'a ShortcutBinding;
    type IntoIter = std::slice::Iter<'a, ShortcutBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

impl Serialize for ShortcutList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entry_appends_binding() {
        let mut list = ShortcutList::default();
        let binding = list.load("MoveUp", "Ctrl+Alt+Up").unwrap().unwrap();
        assert_eq!(binding.action, Action::MoveUp);
        assert_eq!(list.len(), 1);
        assert_eq!(list.action_for(&"Ctrl+Alt+Up".parse().unwrap()), Some(Action::MoveUp));
    }

    #[test]
    fn test_disabled_entry_creates_nothing() {
        let mut list = ShortcutList::default();
        assert!(list.load("ZoomIn", "None").unwrap().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_disabled_wins_over_unknown_action() {
        let mut list = ShortcutList::default();
        assert!(list.load("Jump", "None").unwrap().is_none());
    }

    #[test]
    fn test_unknown_action_names_key_and_value() {
        let mut list = ShortcutList::default();
        for value in ["Ctrl+J", "not a hotkey"] {
            let err = list.load("Jump", value).unwrap_err();
            match err {
                ConfigError::UnknownAction { key, value: v } => {
                    assert_eq!(key, "Jump");
                    assert_eq!(v, value);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
        assert!(list.is_empty());
    }

    #[test]
    fn test_malformed_hotkey_consumes_no_slot() {
        let mut list = ShortcutList::with_limit(1);
        let err = list.load("ZoomOut", "Ctrl+").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
        assert!(list.is_empty());
        list.load("ZoomOut", "Ctrl+Minus").unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_limit_is_enforced() {
        let mut list = ShortcutList::default();
        for i in 0..MAX_SHORTCUTS {
            list.load("MoveLeft", &format!("F{}", i % 24 + 1)).unwrap();
        }
        assert_eq!(list.len(), MAX_SHORTCUTS);

        let err = list.load("MoveRight", "Ctrl+Right").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ShortcutLimitExceeded { limit } if limit == MAX_SHORTCUTS
        ));
        assert_eq!(list.len(), MAX_SHORTCUTS);
        assert_eq!(list.as_slice()[MAX_SHORTCUTS - 1].action, Action::MoveLeft);
    }

    #[test]
    fn test_limit_checked_before_action_lookup() {
        let mut list = ShortcutList::with_limit(0);
        let err = list.load("Jump", "Ctrl+J").unwrap_err();
        assert!(matches!(err, ConfigError::ShortcutLimitExceeded { .. }));
    }

    #[test]
    fn test_serializes_as_sequence() {
        let mut list = ShortcutList::default();
        list.load("ResetScale", "Ctrl+Alt+0").unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"hotkey":"Ctrl+Alt+0","action":"ResetScale"}]"#);
    }
}
