use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Member, Mentionable, UserId};

use crate::bot::sender::WelcomeSender;
use crate::store::WelcomeStore;

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(
    store: &WelcomeStore,
    welcome_message: &str,
    ctx: Context,
    new_member: Member,
) {
    send_welcome(
        store,
        &*ctx.http,
        welcome_message,
        new_member.guild_id,
        new_member.user.id,
    )
    .await;
}

/// Greets `user_id` in the welcome channel configured for `guild_id`.
///
/// Guilds without a configured channel are skipped. Send failures are logged
/// and not retried.
pub async fn send_welcome<S: WelcomeSender + ?Sized>(
    store: &WelcomeStore,
    sender: &S,
    template: &str,
    guild_id: GuildId,
    user_id: UserId,
) {
    // Lock is released once the lookup returns; the send happens unlocked
    let Some(channel_id) = store.get(guild_id).await else {
        tracing::info!("No welcome channel set for guild: {}", guild_id);
        return;
    };

    let message = render_welcome(template, user_id);

    if let Err(e) = sender.send_welcome(channel_id, &message).await {
        tracing::error!(
            "Failed to send welcome message to channel {} in guild {}: {:?}",
            channel_id,
            guild_id,
            e
        );
    } else {
        tracing::debug!(
            "Welcomed user {} in channel {} of guild {}",
            user_id,
            channel_id,
            guild_id
        );
    }
}

/// Substitutes `{user}` in the template with a mention of the member.
pub fn render_welcome(template: &str, user_id: UserId) -> String {
    template.replace("{user}", &user_id.mention().to_string())
}
