//! Config file loader for both application roles

use crate::ini::IniFileStore;
use rdesk_application::{LoadConfigUseCase, SaveConfigUseCase};
use rdesk_domain::{ClientSettings, ConfigError, Result, Role, ServerSettings};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

const APP_DIR: &str = "rdesk";

/// Loads and saves role settings through the file-backed store
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default config file path for `role`
    ///
    /// Returns `<config dir>/rdesk/<role>.ini`, where the config dir is the
    /// platform's per-user one as reported by [`dirs::config_dir`]
    /// (`$XDG_CONFIG_HOME` or `~/.config` on Linux, `~/Library/Application
    /// Support` on macOS, `%APPDATA%` on Windows). `None` when the platform
    /// has no such directory.
    pub fn default_path(role: Role) -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(role.file_name()))
    }

    /// Pick the explicit path if given, the default path otherwise
    pub fn resolve_path(role: Role, explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| Self::default_path(role))
    }

    /// Load the client config on top of the built-in defaults.
    pub fn load_client_config(path: &Path) -> Result<ClientSettings> {
        let mut settings = ClientSettings::default();
        LoadConfigUseCase::new(Self::store()).execute(
            path,
            &ClientSettings::schema(),
            &mut settings,
        )?;
        Ok(settings)
    }

    /// Like [`ConfigLoader::load_client_config`], but a missing file yields
    /// the defaults instead of an error.
    pub fn load_client_config_or_default(path: &Path) -> Result<ClientSettings> {
        match Self::load_client_config(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                info!("No client config at {}, using defaults", path.display());
                Ok(ClientSettings::default())
            }
            other => other,
        }
    }

    /// Write every client field back to `path`
    pub fn save_client_config(path: &Path, settings: &ClientSettings) -> Result<()> {
        SaveConfigUseCase::new(Self::store()).execute(path, &ClientSettings::schema(), settings)?;
        Ok(())
    }

    /// Load the server config. Every plain field must be present.
    pub fn load_server_config(path: &Path) -> Result<ServerSettings> {
        let mut settings = ServerSettings::default();
        LoadConfigUseCase::new(Self::store()).execute(
            path,
            &ServerSettings::schema(),
            &mut settings,
        )?;
        Ok(settings)
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration files:");
        for role in [Role::Client, Role::Server] {
            match Self::default_path(role) {
                Some(path) if path.exists() => {
                    println!("  [FOUND] {:<6}: {}", role, path.display())
                }
                Some(path) => println!("  [     ] {:<6}: {}", role, path.display()),
                None => println!("  [     ] {:<6}: no config directory", role),
            }
        }
    }

    fn store() -> Arc<IniFileStore> {
        Arc::new(IniFileStore::new())
    }
}
