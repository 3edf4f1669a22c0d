// ABOUTME: Command-line entry point for the menu ranker
// ABOUTME: Prints a ranked menu view as text cards or JSON, or serves the views over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Top 3 high-protein entrées for today
//! menu-ranker top
//!
//! # Every ranked entrée for a given day, as JSON
//! menu-ranker all --date 2025-02-10 --json
//!
//! # Ranked entrées whose name contains "chicken"
//! menu-ranker search chicken
//!
//! # Rank a saved weekly menu instead of calling the API
//! menu-ranker top --fixture week.json
//!
//! # Serve the JSON views
//! menu-ranker serve --port 8081
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use menu_ranker::{
    config::MenuConfig,
    dates::parse_date,
    errors::AppError,
    external::{build_http_client, FixtureMenuSource, MenuSource},
    formatters::render_report,
    logging::LoggingConfig,
    routes,
    service::{MenuService, MenuView},
};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "menu-ranker",
    version,
    about = "Rank school lunch entrées by protein per calorie",
    long_about = "Fetches the district weekly menu, filters and deduplicates entrées, and ranks them by protein-to-calorie ratio."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Menu date (YYYY-MM-DD); defaults to today in the district timezone
    #[arg(long, global = true)]
    date: Option<String>,

    /// Read the weekly menu from a JSON file instead of the API
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Cards shown by the top views
    #[arg(long, global = true)]
    top: Option<usize>,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging for this crate
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
#[non_exhaustive]
enum Command {
    /// Top N high-protein entrées
    Top,
    /// Every ranked entrée
    All,
    /// Ranked entrées whose name contains a query (case-insensitive)
    Search {
        /// Substring to look for
        query: String,
    },
    /// Entrées with a photo that failed the nutrient guard
    Archive,
    /// Top N light breakfast items
    Breakfast,
    /// Serve the views as JSON over HTTP
    Serve {
        /// Override HTTP port
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            match e.downcast_ref::<AppError>() {
                Some(app_error) => eprintln!("❌ {}", app_error.user_message()),
                None => eprintln!("❌ {e}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Arc::new(MenuConfig::from_env()?);
    info!("{}", config.summary());

    let service = Arc::new(build_service(Arc::clone(&config), cli.fixture)?);

    let view = match cli.command {
        Command::Serve { port } => {
            let port = port.unwrap_or(config.http_port);
            routes::serve(service, port).await?;
            return Ok(());
        }
        Command::Top => MenuView::Top,
        Command::All => MenuView::All,
        Command::Search { query } => MenuView::Search(query),
        Command::Archive => MenuView::Archive,
        Command::Breakfast => MenuView::Breakfast,
    };

    let date = cli.date.as_deref().map(parse_date).transpose()?;
    let report = service.build_report(&view, date, cli.top).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

fn build_service(config: Arc<MenuConfig>, fixture: Option<PathBuf>) -> Result<MenuService> {
    let service = match fixture {
        Some(path) => {
            let http = build_http_client(config.http_timeout)?;
            let source: Arc<dyn MenuSource> = Arc::new(FixtureMenuSource::new(path));
            MenuService::with_source(config, source, http)
        }
        None => MenuService::from_config(config)?,
    };
    Ok(service)
}
