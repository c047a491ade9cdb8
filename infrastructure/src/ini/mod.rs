//! Config text format
//!
//! The line-oriented reader/writer behind the [`ConfigStore`] port.
//!
//! [`ConfigStore`]: rdesk_application::ConfigStore

pub mod parser;
pub mod store;
pub mod writer;

pub use parser::{decode_text, parse_document};
pub use store::IniFileStore;
pub use writer::render_text;
