use serenity::all::{ChannelId, GuildId};
use test_utils::builder::TestBuilder;

use crate::error::{store::StoreError, AppError};
use crate::store::WelcomeStore;

mod set;
