//! File-backed config store

use super::parser::{decode_text, parse_document};
use super::writer::render_text;
use rdesk_application::ConfigStore;
use rdesk_domain::{ConfigError, IniDocument, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads and writes config files on the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct IniFileStore;

impl IniFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigStore for IniFileStore {
    fn read(&self, path: &Path) -> Result<IniDocument> {
        let bytes = fs::read(path).map_err(|e| ConfigError::io(path, e))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        parse_document(decode_text(&bytes)?)
    }

    fn write(&self, path: &Path, document: &IniDocument) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }
        fs::write(path, render_text(document)).map_err(|e| ConfigError::io(path, e))
    }
}
