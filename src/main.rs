//! uav-telemetry - sends simulated vehicle state over UDP
//!
//! Runs a fixed number of iterations, one `state ...` datagram per tick,
//! then exits with status 0. Send failures are logged and never change the
//! exit status.

use std::env;
use uav_telemetry::config::AppConfig;
use uav_telemetry::error::{Error, Result};
use uav_telemetry::transport::MockSocketFactory;

#[derive(Debug, Default, PartialEq)]
struct Args {
    config_path: Option<String>,
    dry_run: bool,
    /// Arguments that were not understood, reported once logging is up
    ignored: Vec<String>,
}

/// Parse command line arguments (program name excluded).
///
/// Supports:
/// - `uav-telemetry <path>` (positional)
/// - `uav-telemetry --config <path>` / `-c <path>`
/// - `--dry-run`: capture datagrams in memory instead of sending them
///
/// Without a config path the built-in defaults are used.
fn parse_args<I: IntoIterator<Item = String>>(raw: I) -> Result<Args> {
    let mut args = Args::default();
    let mut raw = raw.into_iter();

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--config" | "-c" => match raw.next() {
                Some(path) => args.config_path = Some(path),
                None => {
                    return Err(Error::Config(format!("{} requires a file path", arg)));
                }
            },
            "--dry-run" => args.dry_run = true,
            _ if !arg.starts_with('-') && args.config_path.is_none() => {
                args.config_path = Some(arg);
            }
            _ => args.ignored.push(arg),
        }
    }

    Ok(args)
}

fn main() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;

    let config = match &args.config_path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    log::info!("uav-telemetry v{} starting", env!("CARGO_PKG_VERSION"));
    for arg in &args.ignored {
        log::warn!("Ignoring unknown argument: {}", arg);
    }
    match &args.config_path {
        Some(path) => log::info!("Using config: {}", path),
        None => log::info!("Using built-in defaults"),
    }

    if args.dry_run {
        log::info!("Dry run: datagrams are captured, not sent");
        uav_telemetry::app::run_with(&config, MockSocketFactory::new())?;
    } else {
        uav_telemetry::app::run(&config)?;
    }

    Ok(())
}
