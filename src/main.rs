//! Finboard main entry point

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use finboard_api::{start_server, AppState};
use finboard_config::{Config, ConfigError};
use finboard_core::{Dashboard, FilePreferenceStore, PreferenceStoreRef, Theme, ThemeContext};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "finboard")]
#[command(version = "0.1.0")]
#[command(about = "A personal-finance dashboard serving notifications, transactions and alerts", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn load_config(path: &Path) -> anyhow::Result<(Config, Option<String>)> {
    match Config::load(path) {
        Ok(config) => Ok((config, None)),
        Err(ConfigError::FileNotFound { path }) => Ok((
            Config::default(),
            Some(format!("Config file not found: {}, using defaults", path)),
        )),
        // Logging is not up yet, so the code and suggestions travel in the error chain
        Err(e) => {
            let details = e.to_details();
            Err(anyhow::Error::new(e).context(format!("Failed to load {}\n{}", path.display(), details)))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    // Logging needs the configured level, so a missing-file warning waits until it is up
    let (config, warning) = load_config(&args.config)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.level)).init();
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    } else {
        log::info!("Config loaded from {}", args.config.display());
    }

    let default_theme: Theme = config
        .preferences
        .default_theme
        .parse()
        .map_err(anyhow::Error::msg)
        .context("Invalid preferences.default_theme")?;
    let preferences: PreferenceStoreRef = Arc::new(FilePreferenceStore::new(&config.preferences.path));
    let theme = ThemeContext::load(preferences.clone(), default_theme).await;
    log::info!(
        "Preferences at {}, theme {}",
        config.preferences.path.display(),
        theme.theme()
    );

    let dashboard = Dashboard::new(Utc::now());
    let state = AppState::new(config, dashboard, theme, preferences);
    start_server(state).await
}
