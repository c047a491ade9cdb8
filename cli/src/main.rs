//! CLI entrypoint for rdesk-config
//!
//! This is the main binary that wires the config loader to the
//! command line and the console formatter.

use anyhow::{Context, Result, bail};
use clap::Parser;
use rdesk_domain::{ClientSettings, Role};
use rdesk_infrastructure::ConfigLoader;
use rdesk_presentation::{Cli, Command, ConsoleFormatter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting rdesk-config");

    let config = cli.config.as_deref();
    match cli.command {
        Command::Check { role } => check(role.into(), config),
        Command::Show { role, json } => {
            show(role.into(), config, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Init { force } => {
            init(config, force)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Accept => {
            accept(config)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Paths => {
            ConfigLoader::print_config_sources();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn config_path(role: Role, explicit: Option<&Path>) -> Result<PathBuf> {
    match ConfigLoader::resolve_path(role, explicit) {
        Some(path) => Ok(path),
        None => bail!("No config directory on this platform. Pass --config <PATH>."),
    }
}

fn check(role: Role, explicit: Option<&Path>) -> Result<ExitCode> {
    let path = config_path(role, explicit)?;

    let loaded = match role {
        Role::Client => ConfigLoader::load_client_config(&path).map(|_| ()),
        Role::Server => ConfigLoader::load_server_config(&path).map(|_| ()),
    };

    match loaded {
        Ok(()) => {
            println!("{}", ConsoleFormatter::format_check_ok(role, &path));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_check_error(role, &path, &e));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn show(role: Role, explicit: Option<&Path>, json: bool) -> Result<()> {
    let path = config_path(role, explicit)?;

    let output = match role {
        Role::Client => {
            let settings = ConfigLoader::load_client_config_or_default(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            if json {
                ConsoleFormatter::format_json(&settings)
            } else {
                ConsoleFormatter::format_client(&settings)
            }
        }
        Role::Server => {
            let settings = ConfigLoader::load_server_config(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            if json {
                ConsoleFormatter::format_json(&settings)
            } else {
                ConsoleFormatter::format_server(&settings)
            }
        }
    };

    println!("{}", output);
    Ok(())
}

fn init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path(Role::Client, explicit)?;
    if path.exists() && !force {
        bail!("{} already exists. Use --force to overwrite it.", path.display());
    }

    ConfigLoader::save_client_config(&path, &ClientSettings::default())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default client config to {}", path.display());
    Ok(())
}

fn accept(explicit: Option<&Path>) -> Result<()> {
    let path = config_path(Role::Client, explicit)?;

    let mut settings = ConfigLoader::load_client_config_or_default(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    if settings.agreement_accepted {
        println!("Agreement already accepted in {}", path.display());
        return Ok(());
    }

    settings.agreement_accepted = true;
    ConfigLoader::save_client_config(&path, &settings)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Agreement accepted, saved to {}", path.display());
    Ok(())
}
