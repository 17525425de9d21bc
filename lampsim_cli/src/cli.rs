//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "lampsim", version, about = "Lamp and power-source simulation")]
pub struct Cli {
    /// Path to config TOML (typed)
    #[arg(long, value_name = "FILE", default_value = "etc/lampsim.toml")]
    pub config: PathBuf,

    /// Optional lamp-catalog CSV (strict header)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Log as JSON lines instead of pretty
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Wiring-strategy filter for the demonstration sequence.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum WiringArg {
    /// One shared circuit for every lamp
    Shared,
    /// A fresh source per request (masks the fault latch)
    PerCall,
    /// An isolated source injected into each lamp
    Injected,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the fixed demonstration sequence
    Demo {
        /// Restrict the demo to a single wiring strategy
        #[arg(long, value_enum, value_name = "STRATEGY")]
        wiring: Option<WiringArg>,
    },
    /// Switch on every lamp described in the config
    Run {
        /// Turn each lamp on this many times
        #[arg(long, value_name = "N", default_value_t = 1)]
        repeat: u32,
    },
    /// Quick health check (config parses, catalog loads)
    SelfCheck,
}
