//! Numeric bounds shared by the client and server roles.

/// Lowest accepted TCP port
pub const PORT_MIN: i64 = 1;
/// Highest accepted TCP port
pub const PORT_MAX: i64 = 65535;

/// Smallest scale accepted for windows and desktop
pub const MIN_SCALE: f64 = 0.1;
/// Largest scale accepted for windows, desktop and zoom steps
pub const MAX_SCALE: f64 = 10.0;

/// Buffer size for the server host name (one slot kept for the terminator)
pub const SERVER_HOST_SIZE: usize = 256;
/// Buffer size for the client password
pub const PASSWORD_SIZE: usize = 64;
/// Buffer size for the font pattern
pub const FONT_PATTERN_SIZE: usize = 256;
/// Buffer size for the stats file name
pub const STATS_FILENAME_SIZE: usize = 256;

/// Maximum number of shortcut bindings a server config may define
pub const MAX_SHORTCUTS: usize = 255;
