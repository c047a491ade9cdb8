//! Application roles sharing the config engine

use serde::Serialize;
use std::fmt;

/// Which side of the connection a config file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Server,
}

impl Role {
    /// File name used when no explicit config path is given
    pub fn file_name(&self) -> &'static str {
        match self {
            Role::Client => "client.ini",
            Role::Server => "server.ini",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Client => write!(f, "client"),
            Role::Server => write!(f, "server"),
        }
    }
}
