//! Configuration schema model
//!
//! The declarative surface shared by every application role:
//! validation primitives, field and section descriptors, the parsed
//! document exchanged with the text reader/writer, and the error taxonomy.

pub mod document;
pub mod error;
pub mod schema;
pub mod value;

pub use document::{IniDocument, IniEntry, IniSection};
pub use error::{ConfigError, Result};
pub use schema::{FieldDescriptor, FieldKind, Schema, SectionDescriptor, Slot, WILDCARD_KEY};
