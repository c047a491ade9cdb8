//! Action table for the server role.
//!
//! Maps the action names accepted as keys of the `[Shortcuts]` section to
//! the [`Action`] identifiers the rest of the server dispatches on.

use serde::{Serialize, Serializer};
use std::fmt;

/// Opaque identifier of a server-side action that a shortcut can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ResetPosition,
    ZoomIn,
    ZoomOut,
    ResetScale,
    ToggleWindowTracking,
    AdjustWindowSize,
    ToggleCursorCapturing,
    ToggleColorsInverting,
}

/// Entry of the static action table
#[derive(Debug, Clone, Copy)]
pub struct ActionEntry {
    /// Key used in the `[Shortcuts]` section
    pub name: &'static str,
    pub action: Action,
}

static ACTIONS: [ActionEntry; 12] = [
    // ==================== Movement ====================
    ActionEntry {
        name: "MoveUp",
        action: Action::MoveUp,
    },
    ActionEntry {
        name: "MoveDown",
        action: Action::MoveDown,
    },
    ActionEntry {
        name: "MoveLeft",
        action: Action::MoveLeft,
    },
    ActionEntry {
        name: "MoveRight",
        action: Action::MoveRight,
    },
    ActionEntry {
        name: "ResetPosition",
        action: Action::ResetPosition,
    },
    // ==================== Scale ====================
    ActionEntry {
        name: "ZoomIn",
        action: Action::ZoomIn,
    },
    ActionEntry {
        name: "ZoomOut",
        action: Action::ZoomOut,
    },
    ActionEntry {
        name: "ResetScale",
        action: Action::ResetScale,
    },
    // ==================== Toggles ====================
    ActionEntry {
        name: "ToggleWindowTracking",
        action: Action::ToggleWindowTracking,
    },
    ActionEntry {
        name: "AdjustWindowSize",
        action: Action::AdjustWindowSize,
    },
    ActionEntry {
        name: "ToggleCursorCapturing",
        action: Action::ToggleCursorCapturing,
    },
    ActionEntry {
        name: "ToggleColorsInverting",
        action: Action::ToggleColorsInverting,
    },
];

/// All known actions in table order
pub fn actions() -> &'static [ActionEntry] {
    &ACTIONS
}

impl Action {
    /// Exact-match lookup of an action by its configuration name
    pub fn from_name(name: &str) -> Option<Action> {
        ACTIONS.iter().find(|e| e.name == name).map(|e| e.action)
    }

    /// Configuration name of this action
    pub fn name(&self) -> &'static str {
        match self {
            Action::MoveUp => "MoveUp",
            Action::MoveDown => "MoveDown",
            Action::MoveLeft => "MoveLeft",
            Action::MoveRight => "MoveRight",
            Action::ResetPosition => "ResetPosition",
            Action::ZoomIn => "ZoomIn",
            Action::ZoomOut => "ZoomOut",
            Action::ResetScale => "ResetScale",
            Action::ToggleWindowTracking => "ToggleWindowTracking",
            Action::AdjustWindowSize => "AdjustWindowSize",
            Action::ToggleCursorCapturing => "ToggleCursorCapturing",
            Action::ToggleColorsInverting => "ToggleColorsInverting",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names_match_actions() {
        for entry in actions() {
            assert_eq!(entry.action.name(), entry.name);
            assert_eq!(Action::from_name(entry.name), Some(entry.action));
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(Action::from_name("ZoomIn"), Some(Action::ZoomIn));
        assert!(Action::from_name("zoomin").is_none());
        assert!(Action::from_name("ZoomIn ").is_none());
        assert!(Action::from_name("Jump").is_none());
    }

    #[test]
    fn test_serialize_as_name() {
        let json = serde_json::to_string(&Action::ResetScale).unwrap();
        assert_eq!(json, "\"ResetScale\"");
    }
}
