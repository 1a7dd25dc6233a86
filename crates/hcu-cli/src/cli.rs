//! CLI argument definitions for the configuration wizard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hcu",
    version,
    about = "Heave compensation unit configuration wizard",
    long_about = "Configure a heave compensation unit for simulation.\n\n\
                  Select a unit from the catalog, enter unit and payload parameters,\n\
                  choose special functions and result channels, and export an INI\n\
                  settings file for the simulation package."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Unit catalog CSV (overrides settings and HCU_CATALOG).
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Session file (default: hcu-session.json).
    #[arg(long = "session", value_name = "PATH", global = true)]
    pub session: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List catalog units grouped by category.
    Units,

    /// Show the specification sheet and capabilities of one unit.
    Unit {
        /// Unit ID as listed by `units`.
        #[arg(value_name = "UNIT_ID")]
        unit_id: String,
    },

    /// Show which special functions each unit category supports.
    Capabilities,

    /// Apply an answers profile (TOML) to the session.
    Apply {
        #[arg(value_name = "PROFILE")]
        profile: PathBuf,
    },

    /// Show the current session configuration.
    Show,

    /// Validate the configuration.
    Validate,

    /// Export the configuration file (requires a valid configuration).
    Export(ExportArgs),

    /// Record the user name for this session (no credential check).
    Login {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Reset the configuration; the user stays logged in.
    Clear,

    /// Reset the whole session.
    Logout,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Output directory for the settings file (default: from settings, else ".").
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the file to stdout instead of writing it.
    #[arg(long = "stdout")]
    pub stdout: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
