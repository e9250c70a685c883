use dioxus_logger::tracing;
use serenity::all::{Client, Command, GatewayIntents, Http};

use crate::bot::command::welcome_command;
use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::store::WelcomeStore;

/// Builds the Discord client and registers the bot's slash commands.
///
/// # Arguments
/// - `config` - Application configuration
/// - `store` - Welcome channel registry shared with the event handlers
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started with `start_bot`
/// - `Err(AppError)` - Client construction or command registration failed
pub async fn init_bot(config: &Config, store: WelcomeStore) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(store, config.welcome_message.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    register_commands(&client.http).await?;

    Ok(client)
}

/// Registers the global `/welcome` command.
///
/// Registration is an upsert on Discord's side, so running it on every startup
/// is safe. The application ID is looked up first because the gateway has not
/// delivered it yet at this point.
pub async fn register_commands(http: &Http) -> Result<(), AppError> {
    let app_info = http.get_current_application_info().await?;
    http.set_application_id(app_info.id);

    let command = Command::create_global_command(http, welcome_command()).await?;

    tracing::info!("Registered /{} command ({})", command.name, command.id);

    Ok(())
}

/// Runs the Discord bot until it is shut down.
///
/// Blocks until the gateway connection ends. Ctrl-C shuts all shards down,
/// which makes this function return `Ok(())`.
///
/// # Returns
/// - `Ok(())` - Bot shut down
/// - `Err(AppError)` - Gateway connection could not be opened or failed fatally
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Received Ctrl-C, shutting down Discord bot");
                shard_manager.shutdown_all().await;
            }
            Err(e) => tracing::error!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
