//! `liftctl` binary: config loading, logging setup, signal handling, and
//! subcommand dispatch.

mod cli;
mod error_fmt;
mod run;

use std::fs;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, FILE_GUARD};

fn init_tracing(args: &Cli, cfg: &lift_config::Config) {
    let level = cfg
        .logging
        .level
        .clone()
        .unwrap_or_else(|| args.log_level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &cfg.logging.file {
        let appender = tracing_appender::rolling::never(".", path.as_str());
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(writer)
            .init();
    } else if args.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_config(args: &Cli) -> eyre::Result<lift_config::Config> {
    let text = fs::read_to_string(&args.config)
        .wrap_err_with(|| format!("read config {}", args.config.display()))?;
    let cfg = lift_config::load_toml(&text).wrap_err("parse config TOML")?;
    cfg.validate().wrap_err("invalid configuration")?;
    Ok(cfg)
}

fn main() -> ExitCode {
    color_eyre::install().ok();
    let args = Cli::parse();

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if args.json {
                eprintln!("{}", error_fmt::format_error_json(&err));
            } else {
                eprintln!("{}", error_fmt::humanize(&err));
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Cli) -> eyre::Result<()> {
    let cfg = load_config(args)?;
    init_tracing(args, &cfg);

    match &args.cmd {
        Commands::Run { ticks, sim_start } => {
            let shutdown = Arc::new(AtomicBool::new(false));
            let flag = Arc::clone(&shutdown);
            ctrlc::set_handler(move || {
                flag.store(true, Ordering::SeqCst);
            })
            .wrap_err("install Ctrl-C handler")?;
            run::run_loop(&cfg, *ticks, *sim_start, shutdown)
        }
        Commands::SelfCheck => run::self_check(&cfg),
    }
}
