//! Slash command handling.
//!
//! Every command invocation gets exactly one immediate message response. The
//! decision logic lives in `handle_command`, which only needs the store and the
//! command payload; `handle_interaction_create` delivers its reply to Discord.

use dioxus_logger::tracing;
use serenity::all::{
    ChannelId, CommandData, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, GuildId, Interaction, Mentionable,
};

use crate::bot::command::{CHANNEL_OPTION, WELCOME_COMMAND};
use crate::store::WelcomeStore;

/// Handles the interaction_create event for slash commands
pub async fn handle_interaction_create(
    store: &WelcomeStore,
    ctx: Context,
    interaction: Interaction,
) {
    let command = match interaction {
        Interaction::Command(command) => command,
        other => {
            tracing::debug!("Ignoring non-command interaction {}", other.id());
            return;
        }
    };

    let reply = handle_command(store, command.guild_id, &command.data).await;

    let response =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(reply));

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to respond to /{} interaction {}: {:?}",
            command.data.name,
            command.id,
            e
        );
    }
}

/// Executes a slash command and returns the acknowledgment text.
///
/// # Arguments
/// - `store` - Welcome channel registry
/// - `guild_id` - Guild the command was invoked in, `None` for DMs
/// - `data` - Command name and options
pub async fn handle_command(
    store: &WelcomeStore,
    guild_id: Option<GuildId>,
    data: &CommandData,
) -> String {
    match data.name.as_str() {
        WELCOME_COMMAND => set_welcome_channel(store, guild_id, data).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            "Unknown command.".to_string()
        }
    }
}

async fn set_welcome_channel(
    store: &WelcomeStore,
    guild_id: Option<GuildId>,
    data: &CommandData,
) -> String {
    let Some(guild_id) = guild_id else {
        return "This command can only be used in a server.".to_string();
    };

    let Some(channel_id) = channel_option(data) else {
        return "Channel ID is required.".to_string();
    };

    match store.set_and_save(guild_id, channel_id).await {
        Ok(()) => {
            tracing::info!(
                "Welcome channel for guild {} set to {}",
                guild_id,
                channel_id
            );
            format!("Welcome channel set to {}", channel_id.mention())
        }
        Err(e) => {
            tracing::error!(
                "Failed to persist welcome channel for guild {}: {}",
                guild_id,
                e
            );
            format!("Error saving config: {}", e)
        }
    }
}

fn channel_option(data: &CommandData) -> Option<ChannelId> {
    data.options
        .iter()
        .find(|option| option.name == CHANNEL_OPTION)
        .and_then(|option| option.value.as_channel_id())
}
