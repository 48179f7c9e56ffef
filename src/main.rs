//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout against the configured
//! data file.

use anyhow::Result;
use contact_book::{Config, Dispatcher, FileBookRepository, Session, TerminalConsole};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only so it never mixes with the prompt)
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using address book file: {}", config.data_file.display());

    let repository = FileBookRepository::new(&config.data_file);
    let mut session = Session::open(repository, Dispatcher::new());
    let mut console = TerminalConsole::stdio();
    session.run(&mut console);

    info!("Session ended");
    Ok(())
}
