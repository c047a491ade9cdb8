//! Parsed configuration document
//!
//! The structure exchanged between the text reader/writer and the
//! load/save engine: ordered sections, each holding ordered key/value
//! entries exactly as they appear in the file.

/// A single `key = value` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniEntry {
    pub key: String,
    pub value: String,
}

/// A `[Name]` block with its entries in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniSection {
    pub name: String,
    pub entries: Vec<IniEntry>,
}

impl IniSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Value of the last entry with this key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }
}

/// Ordered list of section blocks.
///
/// Every `[Name]` header of a file opens its own block, so a name that is
/// repeated later in the file shows up more than once, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<IniSection>,
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new block at the end of the document
    pub fn start_section(&mut self, name: &str) -> &mut IniSection {
        self.sections.push(IniSection::new(name));
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    /// Append an entry.
    ///
    /// The entry joins the last block when it has the same name, otherwise
    /// a new block is opened.
    pub fn push(&mut self, section: &str, key: impl Into<String>, value: impl Into<String>) {
        let entry = IniEntry {
            key: key.into(),
            value: value.into(),
        };
        match self.sections.last_mut() {
            Some(last) if last.name == section => last.entries.push(entry),
            _ => self.start_section(section).entries.push(entry),
        }
    }

    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }

    /// First block with this name
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Value of the last entry with this key across every block named `section`
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .rev()
            .filter(|s| s.name == section)
            .find_map(|s| s.get(key))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
