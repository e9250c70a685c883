mod bot;
mod config;
mod error;
mod startup;
mod store;

use dioxus_logger::tracing::{self, Level};

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    startup::load_env_file()?;
    let config = Config::from_env()?;

    let store = startup::load_welcome_store(&config)?;

    let client = bot::start::init_bot(&config, store).await?;

    tracing::info!("Bot is now running. Press CTRL+C to exit.");

    bot::start::start_bot(client).await
}
