use serenity::all::{ChannelId, Http};
use serenity::async_trait;

/// Outbound capability used to post welcome messages.
///
/// Implemented for Serenity's `Http` client in production. Tests substitute an
/// implementation that records messages instead of calling Discord.
#[async_trait]
pub trait WelcomeSender: Send + Sync {
    /// Posts `content` to `channel_id`.
    async fn send_welcome(&self, channel_id: ChannelId, content: &str) -> serenity::Result<()>;
}

#[async_trait]
impl WelcomeSender for Http {
    async fn send_welcome(&self, channel_id: ChannelId, content: &str) -> serenity::Result<()> {
        channel_id.say(self, content).await?;
        Ok(())
    }
}
