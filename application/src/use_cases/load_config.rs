//! Load Config use case
//!
//! Walks a parsed config document in file order and dispatches every entry
//! to the field descriptor that claims its key.

use crate::ports::config_store::ConfigStore;
use rdesk_domain::{ConfigError, FieldKind, IniDocument, Result, Schema, SectionDescriptor};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What a successful load pass consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Distinct section names present in the file
    pub sections: usize,
    /// Entries dispatched to a field
    pub entries: usize,
}

/// Apply every entry of `document` to `settings`.
///
/// Section blocks and their keys are processed in file order, so the
/// first failure in the file is the one reported. A key is matched against
/// the exact field keys of its section first, then against the section's
/// wildcard. A section name repeated later in the file is checked for
/// required fields after its last block. Schema sections the file does
/// not mention at all are checked at the end.
///
/// The first failure aborts the pass. Entries applied before it stay
/// applied.
pub fn apply_document<S>(
    schema: &Schema<S>,
    document: &IniDocument,
    settings: &mut S,
) -> Result<LoadSummary> {
    let blocks = document.sections();
    let mut summary = LoadSummary::default();
    let mut seen: HashMap<&str, HashSet<&str>> = HashMap::new();

    for (index, section) in blocks.iter().enumerate() {
        let descriptor = schema
            .find(&section.name)
            .ok_or_else(|| ConfigError::UnknownSection {
                section: section.name.clone(),
            })?;

        let seen_keys = seen.entry(descriptor.name()).or_default();
        for entry in &section.entries {
            let field = descriptor
                .find(&entry.key)
                .ok_or_else(|| ConfigError::UnknownKey {
                    section: section.name.clone(),
                    key: entry.key.clone(),
                })?;

            if let FieldKind::Text { capacity, .. } = field.kind()
                && entry.value.chars().count() >= *capacity
            {
                warn!(
                    section = %section.name,
                    key = %entry.key,
                    "Value is longer than {} characters and was truncated",
                    capacity.saturating_sub(1)
                );
            }

            debug!(section = %section.name, key = %entry.key, "Loading config entry");
            field.load(settings, &entry.key, &entry.value)?;
            seen_keys.insert(field.key());
            summary.entries += 1;
        }

        let repeated_later = blocks[index + 1..].iter().any(|s| s.name == section.name);
        if !repeated_later {
            check_required(descriptor, seen_keys)?;
            summary.sections += 1;
        }
    }

    for descriptor in schema.sections() {
        if !seen.contains_key(descriptor.name()) {
            check_required(descriptor, &HashSet::new())?;
        }
    }

    Ok(summary)
}

fn check_required<S>(descriptor: &SectionDescriptor<S>, seen: &HashSet<&str>) -> Result<()> {
    match descriptor
        .required_fields()
        .find(|field| !seen.contains(field.key()))
    {
        Some(field) => Err(ConfigError::MissingRequiredField {
            section: descriptor.name().to_string(),
            key: field.key().to_string(),
        }),
        None => Ok(()),
    }
}

/// Use case for loading a config file into a settings record
pub struct LoadConfigUseCase<C: ConfigStore> {
    store: Arc<C>,
}

impl<C: ConfigStore> LoadConfigUseCase<C> {
    pub fn new(store: Arc<C>) -> Self {
        Self { store }
    }

    /// Read `path` and apply it to `settings`
    pub fn execute<S>(
        &self,
        path: &Path,
        schema: &Schema<S>,
        settings: &mut S,
    ) -> Result<LoadSummary> {
        info!("Loading config from {}", path.display());

        let document = self.store.read(path)?;
        let summary = apply_document(schema, &document, settings)?;

        info!(
            "Loaded {} entries in {} sections from {}",
            summary.entries,
            summary.sections,
            path.display()
        );
        Ok(summary)
    }
}
