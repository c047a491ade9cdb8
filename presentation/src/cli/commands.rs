//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use rdesk_domain::Role;
use std::path::PathBuf;

/// Which config file a command works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// Remote desktop viewer settings
    Client,
    /// Screen sharing server settings
    Server,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Client => Role::Client,
            RoleArg::Server => Role::Server,
        }
    }
}

/// CLI arguments for rdesk-config
#[derive(Parser, Debug)]
#[command(name = "rdesk-config")]
#[command(author, version)]
#[command(about = "Inspect and maintain rdesk client and server config files")]
#[command(long_about = r#"
rdesk-config loads, validates and writes the INI files used by the rdesk
remote desktop client and server.

Config files are looked up in (first match wins):
1. --config <path>                  Explicit config file
2. ~/.config/rdesk/client.ini       Client config
   ~/.config/rdesk/server.ini       Server config

Example:
  rdesk-config check --role server
  rdesk-config show --role client --json
  rdesk-config init
  rdesk-config accept
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a config file and report the first problem, if any
    Check {
        #[arg(short, long, value_enum, default_value = "server")]
        role: RoleArg,
    },
    /// Print the effective settings
    Show {
        #[arg(short, long, value_enum, default_value = "client")]
        role: RoleArg,

        /// Print JSON instead of the formatted view
        #[arg(long)]
        json: bool,
    },
    /// Write a client config file with the built-in defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Record that the user accepted the license agreement
    Accept,
    /// Show configuration file locations
    Paths,
}
