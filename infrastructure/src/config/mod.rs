//! Config file loading for rdesk
//!
//! Resolves where each role's config file lives and runs the load/save
//! use cases against the file system. When no path is given the file is
//! looked up in the per-user platform config directory:
//!
//! - Client: `<config dir>/rdesk/client.ini`
//! - Server: `<config dir>/rdesk/server.ini`

mod loader;

pub use loader::ConfigLoader;
