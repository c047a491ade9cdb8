//! Config store port
//!
//! Defines the interface to the line-oriented text reader/writer that turns
//! a config file into an [`IniDocument`] and back.

use rdesk_domain::{IniDocument, Result};
use std::path::Path;

/// Reads and writes parsed config documents.
///
/// Implementations own the text format: section headers, `key = value`
/// lines, comments and whitespace trimming. Use cases only see the
/// resulting [`IniDocument`].
pub trait ConfigStore {
    /// Parse the file at `path`
    fn read(&self, path: &Path) -> Result<IniDocument>;

    /// Replace the file at `path` with the textual form of `document`
    fn write(&self, path: &Path, document: &IniDocument) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use rdesk_domain::ConfigError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory store keyed by path
    #[derive(Default)]
    pub(crate) struct MemoryStore {
        files: RefCell<HashMap<PathBuf, IniDocument>>,
    }

    impl MemoryStore {
        pub(crate) fn with_file(path: &str, document: IniDocument) -> Self {
            let store = Self::default();
            store.files.borrow_mut().insert(PathBuf::from(path), document);
            store
        }

        pub(crate) fn file(&self, path: &str) -> Option<IniDocument> {
            self.files.borrow().get(Path::new(path)).cloned()
        }
    }

    impl ConfigStore for MemoryStore {
        fn read(&self, path: &Path) -> Result<IniDocument> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                ConfigError::io(path, std::io::Error::from(std::io::ErrorKind::NotFound))
            })
        }

        fn write(&self, path: &Path, document: &IniDocument) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), document.clone());
            Ok(())
        }
    }
}
