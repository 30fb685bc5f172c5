//! # CLI Layer
//!
//! This module is **one possible UI client** for rentz. It is the only place
//! that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Installs the logging subscriber
//! - Parses arguments and reads the config file location
//! - Formats amounts and records for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the registry and configuration
//! - `handle_*()`: Per-command handlers that call the API and print the result
//! - `menu::Session`: The interactive desk behind `rentz` / `rentz shell`

use super::menu::Session;
use super::render::{render_fleet, render_messages, render_quote};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use rentz::api::{configure, ConfigAction, RentalApi};
use rentz::config::RentalConfig;
use rentz::error::{RentalError, Result};
use rentz::store::memory::InMemoryStore;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RENTZ_LOG";

struct AppContext {
    api: RentalApi<InMemoryStore>,
    config: RentalConfig,
    config_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Shell) => handle_shell(&mut ctx),
        Some(Commands::Fleet { json }) => handle_fleet(&ctx, json),
        Some(Commands::Quote { vehicle_id, days }) => handle_quote(&ctx, &vehicle_id, days),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "rentz", "rentz")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| {
                RentalError::InvalidInput("Could not determine config directory".into())
            })?,
    };
    let config = RentalConfig::load(&config_dir)?;
    tracing::debug!(dir = %config_dir.display(), ?config, "config loaded");

    let store = InMemoryStore::new();
    let api = if config.seed_catalog && !cli.empty {
        RentalApi::with_catalog(store)?
    } else {
        RentalApi::new(store)
    };

    Ok(AppContext {
        api,
        config,
        config_dir,
    })
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(
        &mut ctx.api,
        &ctx.config.currency,
        stdin.lock(),
        stdout.lock(),
    )
    .run()
}

fn handle_fleet(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_vehicles()?;

    let mut out = io::stdout().lock();
    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&result.listed_vehicles)?
        )?;
        return Ok(());
    }
    write!(
        out,
        "{}",
        render_fleet(&result.listed_vehicles, &ctx.config.currency)
    )?;
    write!(out, "{}", render_messages(&result.messages))?;
    Ok(())
}

fn handle_quote(ctx: &AppContext, vehicle_id: &str, days: i64) -> Result<()> {
    let result = ctx.api.quote(vehicle_id, days)?;
    let mut out = io::stdout().lock();
    if let Some(quote) = &result.quote {
        write!(out, "{}", render_quote(quote, &ctx.config.currency))?;
    }
    write!(out, "{}", render_messages(&result.messages))?;
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = configure(&ctx.config_dir, action)?;
    let mut out = io::stdout().lock();
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            writeln!(out, "currency = {}", config.currency)?;
            writeln!(out, "seed-catalog = {}", config.seed_catalog)?;
        }
    }
    write!(out, "{}", render_messages(&result.messages))?;
    Ok(())
}
