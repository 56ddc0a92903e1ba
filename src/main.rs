// Entry point: resolves the API key, loads config, and runs the TUI.

mod action;
mod api;
mod app;
mod components;
mod config;
mod logging;
mod query;
mod theme;
mod tui;
mod ui;

use clap::Parser;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "cinesearch", about = "TMDB movie search TUI")]
struct Cli {
    /// TMDB v3 API key. Overrides the config file.
    #[arg(long, env = "TMDB_API_KEY")]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(key) = cli.api_key {
        config.tmdb.api_key = Some(key);
    }

    if config.tmdb.api_key.as_deref().unwrap_or("").is_empty() {
        eprintln!("Error: no TMDB API key configured.");
        eprintln!("Set TMDB_API_KEY, pass --api-key, or add api_key to {}", Config::config_path().display());
        std::process::exit(1);
    }

    logging::init()?;

    let mut app = app::App::new(config)?;
    app.run().await?;

    Ok(())
}
