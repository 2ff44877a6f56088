//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with email and password.
    Login {
        /// Account email address
        #[arg(long, value_name = "EMAIL")]
        email: String,

        /// Account password (falls back to `ASPIRE_PASSWORD`)
        #[arg(long, env = "ASPIRE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Redeem a registration code handed out by a tutor.
    Redeem {
        /// Registration code
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Show the cached profile after reconciling it with the server.
    Show,
    /// Change presentation and profile settings.
    Settings {
        /// Theme mode (light|dark)
        #[arg(long, value_name = "MODE")]
        theme: Option<String>,

        /// Font style name
        #[arg(long, value_name = "FONT")]
        font: Option<String>,

        /// Preferred language code (en, de, ru, uk)
        #[arg(long, value_name = "CODE")]
        language: Option<String>,

        /// Preferred display name
        #[arg(long, value_name = "NAME")]
        preferred_name: Option<String>,

        /// IANA time zone
        #[arg(long, value_name = "ZONE")]
        time_zone: Option<String>,
    },
    /// Upload a new profile picture.
    Avatar {
        /// Image file
        #[arg(value_name = "FILE")]
        image: PathBuf,
    },
    /// Sign out and remove the cached profile.
    Logout,
}

#[derive(Parser, Debug)]
#[command(
    name = "aspire",
    about = "Aspire tutoring client command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Log output format. `RUST_LOG` controls the level.
    #[arg(long, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,

    /// Read configuration from this file instead of the environment
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}
