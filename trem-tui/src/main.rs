use std::env;
use std::sync::Arc;

use config::AppConfig;
use trem_core::{ManagedSession, Prefs};
use ui::SessionClientUI;
mod config;
mod ui;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Set default log level to off if RUST_LOG is not set
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "off");
    }

    let config = AppConfig::from_env();

    // Log to a file, the terminal belongs to the UI
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_path)?)))
        .init();

    log::info!("Starting trem");

    let prefs = Prefs::load(&config.prefs_path)?;
    let session = Arc::new(ManagedSession::new(config.config_dir.clone()));
    session.start(&prefs).await?;

    let mut tui = SessionClientUI::new(prefs, session, config.config_dir);
    tui.run_ui().await?;

    log::info!("trem finished");
    Ok(())
}
