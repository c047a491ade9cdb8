//! Save Config use case
//!
//! Walks the schema in registry order and writes back every field that has
//! a save function. Wildcard fields have no textual inverse and are skipped.

use crate::ports::config_store::ConfigStore;
use rdesk_domain::{IniDocument, Result, Schema};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Build the document the save engine writes for `settings`.
///
/// Sections without any saved field are left out.
pub fn render_document<S>(schema: &Schema<S>, settings: &S) -> IniDocument {
    let mut document = IniDocument::new();
    for section in schema.sections() {
        for field in section.fields() {
            if let Some(value) = field.save(settings) {
                debug!(section = section.name(), key = field.key(), "Saving config entry");
                document.push(section.name(), field.key(), value);
            }
        }
    }
    document
}

/// Use case for writing a settings record back to a config file
pub struct SaveConfigUseCase<C: ConfigStore> {
    store: Arc<C>,
}

impl<C: ConfigStore> SaveConfigUseCase<C> {
    pub fn new(store: Arc<C>) -> Self {
        Self { store }
    }

    /// Render `settings` and write them to `path`.
    ///
    /// Returns the number of entries written.
    pub fn execute<S>(&self, path: &Path, schema: &Schema<S>, settings: &S) -> Result<usize> {
        let document = render_document(schema, settings);
        let entries = document.sections().iter().map(|s| s.entries.len()).sum::<usize>();

        self.store.write(path, &document)?;

        info!("Saved {} entries to {}", entries, path.display());
        Ok(entries)
    }
}
