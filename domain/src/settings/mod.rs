//! Process-wide settings records, one per application role.

pub mod client;
pub mod role;
pub mod server;

pub use client::{ClientSettings, Orientation};
pub use role::Role;
pub use server::{
    ControlSettings, DefaultsSettings, ListenSettings, MonitorSettings, ServerSettings,
    StatsSettings,
};
