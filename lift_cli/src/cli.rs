//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "liftctl", version, about = "Lift table controller CLI")]
pub struct Cli {
    /// Path to config TOML (typed)
    #[arg(long, value_name = "FILE", default_value = "etc/liftctl.toml")]
    pub config: PathBuf,

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

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the control loop against the simulated table
    Run {
        /// Stop after this many loop ticks (runs until Ctrl-C if omitted)
        #[arg(long, value_name = "N")]
        ticks: Option<u64>,

        /// Initial position of the simulated table
        #[arg(long, value_name = "POS", default_value_t = 1200)]
        sim_start: u16,
    },
    /// Quick health check (config parses, backends assemble)
    SelfCheck,
}
