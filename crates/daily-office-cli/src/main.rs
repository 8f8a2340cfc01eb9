//! Daily Office CLI
//!
//! Resolves the 1662 Prayer Book calendar and lectionary for a date and
//! prints the result as JSON.
//!
//! # Commands
//!
//! - `day`: liturgical identity (season, week, name, holy day, collect)
//! - `psalms`: psalms appointed for morning or evening prayer
//! - `readings`: lessons appointed under a reading plan
//!
//! Every command takes `--date YYYY-MM-DD`; without it, today's local date
//! is used. Exit code 0 on success, 1 on error.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use daily_office_core::{ConfigResult, LogFormat, OfficeConfig};

mod commands;
mod error;

use error::{exit_code_for_error, CliError};

/// Daily Office - 1662 calendar, psalter and lectionary
#[derive(Parser)]
#[command(name = "daily-office")]
#[command(version)]
#[command(about = "Calendar, psalter and lectionary of the 1662 Book of Common Prayer")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (TOML); replaces the layered config/ lookup
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Liturgical identity of a date
    Day(commands::day::DayArgs),
    /// Psalms appointed for a session
    ///
    /// Psalm 119 is reported with the verse portion read at that session.
    Psalms(commands::psalms::PsalmsArgs),
    /// Lessons appointed for a session under a reading plan
    ///
    /// Plan tables are read from `lectionary.data_dir` as `<plan>.json`.
    Readings(commands::readings::ReadingsArgs),
}

fn load_config(path: Option<&PathBuf>) -> ConfigResult<OfficeConfig> {
    match path {
        Some(path) => OfficeConfig::from_file(path),
        None => OfficeConfig::load(),
    }
}

fn init_logging(verbose: u8, config: Option<&OfficeConfig>) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(config.map_or("warn", |c| c.logging.level.as_str()))
        }),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    match config.map(|c| c.logging.format).unwrap_or_default() {
        LogFormat::Pretty => builder.init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref());
    init_logging(cli.verbose, config.as_ref().ok());

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            let e = CliError::from(e);
            error!("Configuration error: {}", e);
            std::process::exit(exit_code_for_error(&e).into());
        }
    };

    // Dispatch to command handlers
    let exit_code = match cli.command {
        Commands::Day(args) => commands::day::handle_day(args),
        Commands::Psalms(args) => commands::psalms::handle_psalms(args),
        Commands::Readings(args) => commands::readings::handle_readings(args, &config).await,
    };

    std::process::exit(exit_code);
}
