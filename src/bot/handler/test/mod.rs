use std::sync::Mutex;

use serenity::all::{ChannelId, GuildId, UserId};
use serenity::async_trait;
use test_utils::builder::TestBuilder;
use test_utils::serenity::{create_test_command_data, create_test_member};

use crate::bot::sender::WelcomeSender;
use crate::error::AppError;
use crate::store::WelcomeStore;

mod interaction;

/// Records welcome messages instead of sending them to Discord.
#[derive(Default)]
struct FakeSender {
    sent: Mutex<Vec<(ChannelId, String)>>,
    fail: bool,
}

impl FakeSender {
    fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn sent(&self) -> Vec<(ChannelId, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl WelcomeSender for FakeSender {
    async fn send_welcome(&self, channel_id: ChannelId, content: &str) -> serenity::Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((channel_id, content.to_string()));

        if self.fail {
            return Err(serenity::Error::Other("simulated send failure"));
        }
        Ok(())
    }
}
