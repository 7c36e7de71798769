use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tooldir::query::QueryState;
use tooldir::source::{CatalogSource, LoadOutcome, load_or_empty, source_for};

mod cli;
mod config;
mod tui;

use cli::Cli;
use cli::commands::Commands;
use cli::output;
use config::Config;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tooldir")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("tooldir.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{} {}", "Catalog source:".yellow(), config.source.location);
    }

    let source = source_for(&config.source.location, config.source.timeout())?;

    match &cli.command {
        None => run_tui(None, source, config).await,
        Some(Commands::Browse { slug }) => run_tui(slug.clone(), source, config).await,
        Some(command @ Commands::List { .. }) => {
            let query = command.list_query().unwrap_or_default();
            handle_list_command(&query, source.as_ref(), config).await
        }
        Some(Commands::Categories) => handle_categories_command(source.as_ref()).await,
        Some(Commands::Show { slug }) => handle_show_command(slug, source.as_ref()).await,
        Some(Commands::Check) => handle_check_command(source.as_ref()).await,
    }
}

async fn run_tui(slug: Option<String>, source: Arc<dyn CatalogSource>, config: &Config) -> Result<()> {
    info!("Launching TUI mode");
    let screen = match slug {
        Some(slug) => tui::Screen::Detail { slug },
        None => tui::Screen::List,
    };

    let app = tui::App::new(config.listing.page_size, config.listing.card_tag_limit);
    let events = tui::EventHandler::new(config.tui.tick_rate_ms);
    let terminal = tui::init_terminal()?;

    let mut runner = tui::TuiRunner::new(terminal, app, events, source);
    let result = runner.run(screen).await;

    tui::restore_terminal()?;
    result
}

/// Load the catalog, printing the error view when the fetch failed.
async fn load(source: &dyn CatalogSource) -> LoadOutcome {
    let outcome = load_or_empty(source).await;
    if let Some(e) = &outcome.error {
        eprint!("{}", output::render_load_error(&e.to_string()));
    }
    outcome
}

async fn handle_list_command(query: &QueryState, source: &dyn CatalogSource, config: &Config) -> Result<()> {
    info!(
        "Listing tools - search: {:?}, category: {:?}, page: {}",
        query.search(),
        query.category(),
        query.page()
    );
    let outcome = load(source).await;
    let listing = outcome.catalog.listing(query, config.listing.page_size);
    print!(
        "{}",
        output::render_listing(&listing, query.category(), config.listing.card_tag_limit)
    );
    Ok(())
}

async fn handle_categories_command(source: &dyn CatalogSource) -> Result<()> {
    info!("Listing categories");
    let outcome = load(source).await;
    println!("{}", output::render_categories(&outcome.catalog.categories(), ""));
    Ok(())
}

async fn handle_show_command(slug: &str, source: &dyn CatalogSource) -> Result<()> {
    info!("Showing tool: {}", slug);
    let outcome = load(source).await;
    if outcome.error.is_some() {
        eyre::bail!("Failed to load catalog from {}", source.location());
    }
    match outcome.catalog.find_by_slug(slug) {
        Some(record) => {
            print!("{}", output::render_detail(record));
            Ok(())
        }
        None => {
            print!("{}", output::render_not_found(slug));
            eyre::bail!("No tool matches the slug: {}", slug)
        }
    }
}

async fn handle_check_command(source: &dyn CatalogSource) -> Result<()> {
    info!("Checking catalog integrity");
    let outcome = load(source).await;
    if let Some(e) = outcome.error {
        return Err(e).context(format!("Failed to load catalog from {}", source.location()));
    }

    let issues = outcome.catalog.check();
    if issues.is_empty() {
        println!("{} {} tools, no issues", "ok:".green(), outcome.catalog.len());
        return Ok(());
    }
    print!("{}", output::render_issues(&issues));
    eyre::bail!("Found {} catalog issue(s)", issues.len())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_source(cli.source.as_deref());

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config)
        .await
        .context("Application failed")?;

    Ok(())
}
