//! lampsim binary: tracing setup, command dispatch, stable exit codes.

mod cli;
mod demo;
mod error_fmt;
mod run;

use std::path::Path;

use clap::Parser;
use eyre::WrapErr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use cli::{Cli, Commands, FILE_GUARD, JSON_MODE};

fn main() {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);
    if !cli.json {
        let _ = color_eyre::install();
    }

    if let Err(err) = try_main(&cli) {
        if cli.json {
            eprintln!("{}", error_fmt::format_error_json(&err));
        } else {
            eprintln!("{}", error_fmt::humanize(&err));
        }
        std::process::exit(error_fmt::exit_code_for_error(&err));
    }
}

fn try_main(cli: &Cli) -> eyre::Result<()> {
    match &cli.cmd {
        Commands::Demo { wiring } => {
            init_tracing(cli, None)?;
            demo::run_demo(*wiring)
        }
        Commands::Run { repeat } => {
            let cfg = load_config(&cli.config)?;
            init_tracing(cli, Some(&cfg.logging))?;
            let catalog = match cli.catalog.as_deref() {
                Some(path) => lampsim_config::load_catalog_csv(path)?,
                None => Vec::new(),
            };
            run::run_lamps(&cfg, &catalog, *repeat)
        }
        Commands::SelfCheck => {
            init_tracing(cli, None)?;
            self_check(cli)
        }
    }
}

fn load_config(path: &Path) -> eyre::Result<lampsim_config::Config> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("read config file {}", path.display()))?;
    let cfg = lampsim_config::load_toml(&text)
        .map_err(|e| eyre::eyre!("invalid configuration ({e})"))?;
    cfg.validate()?;
    Ok(cfg)
}

fn self_check(cli: &Cli) -> eyre::Result<()> {
    let cfg = load_config(&cli.config)?;
    println!(
        "config ok: {} sources, {} lamps",
        cfg.sources.len(),
        cfg.lamps.len()
    );
    if let Some(path) = cli.catalog.as_deref() {
        let rows = lampsim_config::load_catalog_csv(path)?;
        println!("catalog ok: {} profiles", rows.len());
    }
    Ok(())
}

/// Install the global subscriber: a console layer (pretty or JSON lines) plus
/// an optional JSON file layer from `[logging]` in the config.
fn init_tracing(cli: &Cli, logging: Option<&lampsim_config::Logging>) -> eyre::Result<()> {
    // The CLI flag wins unless it is the default.
    let level = logging
        .and_then(|l| l.level.as_deref())
        .filter(|_| cli.log_level == "info")
        .unwrap_or(&cli.log_level);
    let filter =
        EnvFilter::try_new(level).wrap_err_with(|| format!("invalid log level '{level}'"))?;

    let console = if cli.json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };

    let file = match logging.and_then(|l| l.file.as_deref()) {
        Some(path) => {
            let path = Path::new(path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .map(std::ffi::OsStr::to_os_string)
                .unwrap_or_else(|| "lampsim.log".into());
            let appender = match logging.and_then(|l| l.rotation.as_deref()).unwrap_or("never") {
                "daily" => tracing_appender::rolling::daily(dir, name),
                "hourly" => tracing_appender::rolling::hourly(dir, name),
                _ => tracing_appender::rolling::never(dir, name),
            };
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(writer)
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();
    Ok(())
}
