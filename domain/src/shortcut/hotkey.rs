//! Hotkey value and its text grammar.
//!
//! A hotkey is written as `+`-separated modifiers followed by one key:
//!
//! ```
//! use rdesk_domain::shortcut::hotkey::{Hotkey, Key, NamedKey};
//!
//! let hotkey: Hotkey = "Ctrl+Alt+Up".parse().unwrap();
//! assert!(hotkey.modifiers.ctrl && hotkey.modifiers.alt);
//! assert_eq!(hotkey.key, Key::Named(NamedKey::Up));
//! ```
//!
//! Modifier names are case-insensitive (`Ctrl`/`Control`, `Alt`, `Shift`,
//! `Super`/`Win`/`Mod4`). The key is a single printable character, a
//! function key `F1`..`F24`, or a named key such as `PageUp`.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing a hotkey specification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HotkeyParseError {
    #[error("hotkey is empty")]
    Empty,

    #[error("empty key name in hotkey")]
    EmptyToken,

    #[error("unknown modifier \"{0}\"")]
    UnknownModifier(String),

    #[error("modifier \"{0}\" is given twice")]
    DuplicateModifier(String),

    #[error("hotkey has no key after its modifiers")]
    MissingKey,

    #[error("unknown key \"{0}\"")]
    UnknownKey(String),
}

/// Modifier keys held together with the main key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.shift || self.super_key)
    }

    /// Set the modifier named `token`.
    ///
    /// Returns `Ok(false)` when `token` is not a modifier name.
    fn insert(&mut self, token: &str) -> Result<bool, HotkeyParseError> {
        let flag = match token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => &mut self.ctrl,
            "alt" => &mut self.alt,
            "shift" => &mut self.shift,
            "super" | "win" | "mod4" => &mut self.super_key,
            _ => return Ok(false),
        };
        if *flag {
            return Err(HotkeyParseError::DuplicateModifier(token.to_string()));
        }
        *flag = true;
        Ok(true)
    }
}

fn is_modifier_name(token: &str) -> bool {
    Modifiers::default().insert(token).unwrap_or(false)
}

/// Keys that are written by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    Space,
    Tab,
    Return,
    Escape,
    BackSpace,
    Plus,
    Minus,
}

impl NamedKey {
    const ALL: [NamedKey; 17] = [
        NamedKey::Up,
        NamedKey::Down,
        NamedKey::Left,
        NamedKey::Right,
        NamedKey::Home,
        NamedKey::End,
        NamedKey::PageUp,
        NamedKey::PageDown,
        NamedKey::Insert,
        NamedKey::Delete,
        NamedKey::Space,
        NamedKey::Tab,
        NamedKey::Return,
        NamedKey::Escape,
        NamedKey::BackSpace,
        NamedKey::Plus,
        NamedKey::Minus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NamedKey::Up => "Up",
            NamedKey::Down => "Down",
            NamedKey::Left => "Left",
            NamedKey::Right => "Right",
            NamedKey::Home => "Home",
            NamedKey::End => "End",
            NamedKey::PageUp => "PageUp",
            NamedKey::PageDown => "PageDown",
            NamedKey::Insert => "Insert",
            NamedKey::Delete => "Delete",
            NamedKey::Space => "Space",
            NamedKey::Tab => "Tab",
            NamedKey::Return => "Return",
            NamedKey::Escape => "Escape",
            NamedKey::BackSpace => "BackSpace",
            NamedKey::Plus => "Plus",
            NamedKey::Minus => "Minus",
        }
    }

    fn from_name(name: &str) -> Option<NamedKey> {
        match name.to_ascii_lowercase().as_str() {
            "enter" => return Some(NamedKey::Return),
            "esc" => return Some(NamedKey::Escape),
            _ => {}
        }
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }
}

/// The main (non-modifier) key of a hotkey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A single printable character
    Char(char),
    /// Function key `F1`..`F24`
    Function(u8),
    Named(NamedKey),
}

impl FromStr for Key {
    type Err = HotkeyParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_whitespace() || c.is_control() {
                return Err(HotkeyParseError::UnknownKey(token.to_string()));
            }
            return Ok(Key::Char(c));
        }

        if let Some(named) = NamedKey::from_name(token) {
            return Ok(Key::Named(named));
        }

        if let Some(number) = token.strip_prefix(['F', 'f'])
            && let Ok(n) = number.parse::<u8>()
            && (1..=24).contains(&n)
            && !number.starts_with(['+', '0'])
        {
            return Ok(Key::Function(n));
        }

        Err(HotkeyParseError::UnknownKey(token.to_string()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Function(n) => write!(f, "F{}", n),
            Key::Named(named) => f.write_str(named.name()),
        }
    }
}

/// A key combination parsed from a shortcut specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl FromStr for Hotkey {
    type Err = HotkeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(HotkeyParseError::Empty);
        }

        let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(HotkeyParseError::EmptyToken);
        }

        // split() always yields at least one token
        let (key_token, modifier_tokens) = match tokens.split_last() {
            Some(parts) => parts,
            None => return Err(HotkeyParseError::Empty),
        };

        let mut modifiers = Modifiers::default();
        for token in modifier_tokens {
            if !modifiers.insert(token)? {
                return Err(HotkeyParseError::UnknownModifier(token.to_string()));
            }
        }

        if is_modifier_name(key_token) {
            return Err(HotkeyParseError::MissingKey);
        }

        Ok(Hotkey {
            modifiers,
            key: key_token.parse()?,
        })
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Modifiers {
            ctrl,
            alt,
            shift,
            super_key,
        } = self.modifiers;
        for (held, name) in [
            (ctrl, "Ctrl"),
            (alt, "Alt"),
            (shift, "Shift"),
            (super_key, "Super"),
        ] {
            if held {
                write!(f, "{}+", name)?;
            }
        }
        write!(f, "{}", self.key)
    }
}

impl Serialize for Hotkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modifiers_and_named_key() {
        let hotkey: Hotkey = "Ctrl+Alt+Up".parse().unwrap();
        assert_eq!(
            hotkey.modifiers,
            Modifiers {
                ctrl: true,
                alt: true,
                ..Default::default()
            }
        );
        assert_eq!(hotkey.key, Key::Named(NamedKey::Up));
    }

    #[test]
    fn test_modifiers_are_case_insensitive() {
        let hotkey: Hotkey = "control+SHIFT+win+a".parse().unwrap();
        assert!(hotkey.modifiers.ctrl);
        assert!(hotkey.modifiers.shift);
        assert!(hotkey.modifiers.super_key);
        assert!(!hotkey.modifiers.alt);
        assert_eq!(hotkey.key, Key::Char('a'));
    }

    #[test]
    fn test_plain_key_without_modifiers() {
        let hotkey: Hotkey = "F5".parse().unwrap();
        assert!(hotkey.modifiers.is_empty());
        assert_eq!(hotkey.key, Key::Function(5));
    }

    #[test]
    fn test_aliases() {
        assert_eq!("Enter".parse::<Key>().unwrap(), Key::Named(NamedKey::Return));
        assert_eq!("esc".parse::<Key>().unwrap(), Key::Named(NamedKey::Escape));
        assert_eq!("pageup".parse::<Key>().unwrap(), Key::Named(NamedKey::PageUp));
    }

    #[test]
    fn test_whitespace_around_tokens() {
        let hotkey: Hotkey = " Ctrl + Plus ".parse().unwrap();
        assert!(hotkey.modifiers.ctrl);
        assert_eq!(hotkey.key, Key::Named(NamedKey::Plus));
    }

    #[test]
    fn test_errors() {
        assert_eq!("".parse::<Hotkey>(), Err(HotkeyParseError::Empty));
        assert_eq!("Ctrl+".parse::<Hotkey>(), Err(HotkeyParseError::EmptyToken));
        assert_eq!("Ctrl++".parse::<Hotkey>(), Err(HotkeyParseError::EmptyToken));
        assert_eq!("Ctrl+Alt".parse::<Hotkey>(), Err(HotkeyParseError::MissingKey));
        assert_eq!(
            "Ctrl+ctrl+a".parse::<Hotkey>(),
            Err(HotkeyParseError::DuplicateModifier("ctrl".to_string()))
        );
        assert_eq!(
            "Hyper+a".parse::<Hotkey>(),
            Err(HotkeyParseError::UnknownModifier("Hyper".to_string()))
        );
        assert_eq!(
            "Ctrl+Banana".parse::<Hotkey>(),
            Err(HotkeyParseError::UnknownKey("Banana".to_string()))
        );
        assert_eq!(
            "F25".parse::<Hotkey>(),
            Err(HotkeyParseError::UnknownKey("F25".to_string()))
        );
        assert_eq!(
            "F0".parse::<Hotkey>(),
            Err(HotkeyParseError::UnknownKey("F0".to_string()))
        );
    }

    #[test]
    fn test_display_is_canonical() {
        let hotkey: Hotkey = "shift+ctrl+pagedown".parse().unwrap();
        assert_eq!(hotkey.to_string(), "Ctrl+Shift+PageDown");
        let reparsed: Hotkey = hotkey.to_string().parse().unwrap();
        assert_eq!(reparsed, hotkey);
    }
}
