//! Server role settings and their schema.
//!
//! The server never writes its config back, and every declared field is
//! required, so a server config file must spell out the whole setup.

use crate::config::error::Result;
use crate::config::schema::{FieldDescriptor, Schema, SectionDescriptor};
use crate::limits::{
    FONT_PATTERN_SIZE, MAX_SCALE, MIN_SCALE, PORT_MAX, PORT_MIN, SERVER_HOST_SIZE,
    STATS_FILENAME_SIZE,
};
use crate::shortcut::ShortcutList;
use serde::Serialize;

/// Upper bound for the frame width/height divisors
pub const MAX_DIM_DIVISOR: i64 = 5;

/// `[Server]`: where the server listens
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ListenSettings {
    pub host: String,
    pub port: u16,
}

/// `[Monitor]`: frame capture rate and downscaling
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MonitorSettings {
    pub max_fps: u32,
    pub width_divisor: u32,
    pub height_divisor: u32,
}

/// `[Control]`: step sizes of the move and zoom actions
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ControlSettings {
    pub move_step: u32,
    pub scale_factor: f64,
}

/// `[Defaults]`: initial state of the toggles and scales
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DefaultsSettings {
    pub window_tracking_enabled: bool,
    pub windows_scale: f64,
    pub desktop_scale: f64,
    pub cursor_capturing_enabled: bool,
    pub colors_inverting_enabled: bool,
}

/// `[Stats]`: frame statistics output
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatsSettings {
    pub enabled: bool,
    pub file: String,
}

/// Settings of the server application.
///
/// Starts zero-valued; a successful load fills every field.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ServerSettings {
    pub server: ListenSettings,
    pub monitor: MonitorSettings,
    pub control: ControlSettings,
    pub font_pattern: String,
    pub defaults: DefaultsSettings,
    pub stats: StatsSettings,
    pub shortcuts: ShortcutList,
}

fn load_shortcut(settings: &mut ServerSettings, key: &str, value: &str) -> Result<()> {
    settings.shortcuts.load(key, value).map(|_| ())
}

impl ServerSettings {
    /// Schema of the server config file. Nothing is saved.
    pub fn schema() -> Schema<ServerSettings> {
        Schema::new()
            .section(
                SectionDescriptor::<ServerSettings>::new("Server")
                    .field(
                        FieldDescriptor::text(
                            "Host",
                            SERVER_HOST_SIZE,
                            |s: &ServerSettings| s.server.host.clone(),
                            |s, v| s.server.host = v,
                        )
                        .required(),
                    )
                    .field(
                        FieldDescriptor::int(
                            "Port",
                            PORT_MIN,
                            PORT_MAX,
                            |s: &ServerSettings| s.server.port.into(),
                            |s, v| s.server.port = v as u16,
                        )
                        .required(),
                    ),
            )
            .section(
                SectionDescriptor::<ServerSettings>::new("Monitor")
                    .field(
                        FieldDescriptor::int(
                            "MaxFPS",
                            1,
                            100,
                            |s: &ServerSettings| s.monitor.max_fps.into(),
                            |s, v| s.monitor.max_fps = v as u32,
                        )
                        .required(),
                    )
                    .field(
                        FieldDescriptor::int(
                            "WidthDivisor",
                            1,
                            MAX_DIM_DIVISOR,
                            |s: &ServerSettings| s.monitor.width_divisor.into(),
                            |s, v| s.monitor.width_divisor = v as u32,
                        )
                        .required(),
                    )
                    .field(
                        FieldDescriptor::int(
                            "HeightDivisor",
                            1,
                            MAX_DIM_DIVISOR,
                            |s: &ServerSettings| s.monitor.height_divisor.into(),
                            |s, v| s.monitor.height_divisor = v as u32,
                        )
                        .required(),
                    ),
            )
            .section(
                SectionDescriptor::<ServerSettings>::new("Control")
                    .field(
                        FieldDescriptor::int(
                            "MoveStep",
                            0,
                            500,
                            |s: &ServerSettings| s.control.move_step.into(),
                            |s, v| s.control.move_step = v as u32,
                        )
                        .required(),
                    )
                    .field(
                        FieldDescriptor::float(
                            "ScaleFactor",
                            1.0,
                            MAX_SCALE,
                            |s: &ServerSettings| s.control.scale_factor,
                            |s, v| s.control.scale_factor = v,
                        )
                        .required(),
                    ),
            )
            .section(
                SectionDescriptor::<ServerSettings>::new("Font").field(
                    FieldDescriptor::text(
                        "Pattern",
                        FONT_PATTERN_SIZE,
                        |s: &ServerSettings| s.font_pattern.clone(),
                        |s, v| s.font_pattern = v,
                    )
                    .required(),
                ),
            )
            .section(
                SectionDescriptor::<ServerSettings>::new("Defaults")
                    .field(
                        FieldDescriptor::bool(
                            "WindowTrackingEnabled",
                            |s: &ServerSettings| s.defaults.window_tracking_enabled,
                            |s, v| s.defaults.window_tracking_enabled = v,
                        )
                        .required(),
                    )
                    .field(
                        FieldDescriptor::float(
                            "WindowsScale",
                            MIN_SCALE,
                            MAX_SCALE,
                            |s: &ServerSettings| s.defaults.windows_scale,
                            |s, v| s.defaults.windows_scale = v,
                        )
                        .required(),
                    )
                    .field(
                        FieldDescriptor::float(
                            "DesktopScale",
                            MIN_SCALE,
                            MAX_SCALE,
                            |s: &ServerSettings| s.defaults.desktop_scale,
                            |s, v| s.defaults.desktop_scale = v,
                        )
                        .required(),
                    )
                    .field(
                        FieldDescriptor::bool(
                            "CursorCapturingEnabled",
                            |s: &ServerSettings| s.defaults.cursor_capturing_enabled,
                            |s, v| s.defaults.cursor_capturing_enabled = v,
                        )
                        .required(),
                    )
                    .field(
                        FieldDescriptor::bool(
                            "ColorsInvertingEnabled",
                            |s: &ServerSettings| s.defaults.colors_inverting_enabled,
                            |s, v| s.defaults.colors_inverting_enabled = v,
                        )
                        .required(),
                    ),
            )
            .section(
                SectionDescriptor::<ServerSettings>::new("Stats")
                    .field(
                        FieldDescriptor::bool(
                            "Enabled",
                            |s: &ServerSettings| s.stats.enabled,
                            |s, v| s.stats.enabled = v,
                        )
                        .required(),
                    )
                    .field(
                        FieldDescriptor::text(
                            "File",
                            STATS_FILENAME_SIZE,
                            |s: &ServerSettings| s.stats.file.clone(),
                            |s, v| s.stats.file = v,
                        )
                        .required(),
                    ),
            )
            .section(
                SectionDescriptor::<ServerSettings>::new("Shortcuts")
                    .field(FieldDescriptor::wildcard(load_shortcut)),
            )
    }
}
