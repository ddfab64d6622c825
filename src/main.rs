// faqdesk - terminal client for a remote FAQ collection.
// Parses configuration, sets up logging, and runs the TUI until the user quits.

mod api;
mod app;
mod cache;
mod config;
mod controller;
mod error;
mod logging;
mod state;
mod store;
mod ui;

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use crate::api::FaqClient;
use crate::app::App;
use crate::config::{Cli, Config};
use crate::store::FaqStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    logging::init_logging(config.verbosity, &config.log_path)?;
    info!(
        api_url = %config.api_url,
        cache_dir = %config.cache_dir.display(),
        cache_mode = ?config.cache_mode,
        "starting faqdesk"
    );

    let client = FaqClient::new(&config.api_url)?;
    let store = Arc::new(FaqStore::new(
        Arc::new(client),
        &config.cache_dir,
        config.cache_mode,
    ));
    let mut app = App::new(store, config.api_url.clone());

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    if let Err(e) = &result {
        error!(error = %e, "terminal error");
    }
    info!("exiting faqdesk");
    Ok(result?)
}
