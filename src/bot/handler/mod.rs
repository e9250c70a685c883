use serenity::all::{Context, EventHandler, Interaction, Member, Ready};
use serenity::async_trait;

use crate::store::WelcomeStore;

pub mod interaction;
pub mod member;
pub mod ready;

#[cfg(test)]
mod test;

/// Discord bot event handler
pub struct Handler {
    pub store: WelcomeStore,
    pub welcome_message: String,
}

impl Handler {
    pub fn new(store: WelcomeStore, welcome_message: String) -> Self {
        Self {
            store,
            welcome_message,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.store, &self.welcome_message, ctx, new_member)
            .await;
    }

    /// Called when a slash command or other interaction is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.store, ctx, interaction).await;
    }
}
