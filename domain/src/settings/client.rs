//! Client role settings and their schema.

use crate::config::schema::{FieldDescriptor, Schema, SectionDescriptor};
use crate::limits::{PASSWORD_SIZE, PORT_MAX, PORT_MIN, SERVER_HOST_SIZE};
use serde::Serialize;
use std::fmt;

/// Server address used until a config file says otherwise
pub const DEFAULT_SERVER_HOST: &str = "192.168.0.101";
/// Server port used until a config file says otherwise
pub const DEFAULT_SERVER_PORT: u16 = 9312;
/// Password used until a config file says otherwise
pub const DEFAULT_PASSWORD: &str = "demo";

/// Screen orientation of the client display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Captions accepted in the config file, indexed by [`Self::index`]
    pub const CAPTIONS: &'static [&'static str] = &["Portrait", "Landscape"];

    pub fn index(&self) -> usize {
        match self {
            Orientation::Portrait => 0,
            Orientation::Landscape => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Orientation::Portrait),
            1 => Some(Orientation::Landscape),
            _ => None,
        }
    }

    pub fn caption(&self) -> &'static str {
        Self::CAPTIONS[self.index()]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.caption())
    }
}

/// Settings of the client application.
///
/// Starts from hard-coded defaults; a config file only overrides the keys
/// it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientSettings {
    pub server_host: String,
    pub server_port: u16,
    #[serde(skip_serializing)]
    pub password: String,
    pub orientation: Orientation,
    pub agreement_accepted: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            password: DEFAULT_PASSWORD.to_string(),
            orientation: Orientation::Portrait,
            agreement_accepted: false,
        }
    }
}

impl ClientSettings {
    /// Schema of the client config file. Every field is optional and saved.
    pub fn schema() -> Schema<ClientSettings> {
        Schema::new()
            .section(
                SectionDescriptor::<ClientSettings>::new("Server")
                    .field(
                        FieldDescriptor::text(
                            "Host",
                            SERVER_HOST_SIZE,
                            |s: &ClientSettings| s.server_host.clone(),
                            |s, v| s.server_host = v,
                        )
                        .saved(),
                    )
                    .field(
                        FieldDescriptor::int(
                            "Port",
                            PORT_MIN,
                            PORT_MAX,
                            |s: &ClientSettings| s.server_port.into(),
                            |s, v| s.server_port = v as u16,
                        )
                        .saved(),
                    ),
            )
            .section(
                SectionDescriptor::<ClientSettings>::new("Security").field(
                    FieldDescriptor::text(
                        "Password",
                        PASSWORD_SIZE,
                        |s: &ClientSettings| s.password.clone(),
                        |s, v| s.password = v,
                    )
                    .saved(),
                ),
            )
            .section(
                SectionDescriptor::<ClientSettings>::new("Client").field(
                    FieldDescriptor::caption(
                        "Orientation",
                        Orientation::CAPTIONS,
                        |s: &ClientSettings| s.orientation.index(),
                        |s, v| s.orientation = Orientation::from_index(v).unwrap_or_default(),
                    )
                    .saved(),
                ),
            )
            .section(
                SectionDescriptor::<ClientSettings>::new("Agreement").field(
                    FieldDescriptor::bool(
                        "Accepted",
                        |s: &ClientSettings| s.agreement_accepted,
                        |s, v| s.agreement_accepted = v,
                    )
                    .saved(),
                ),
            )
    }
}
