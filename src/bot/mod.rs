//! Discord bot integration for guild welcome messages.
//!
//! The bot listens for members joining a guild and greets them in the channel
//! the guild's admins picked with the `/welcome` slash command. Event handlers
//! receive the shared `WelcomeStore` through the `Handler` struct rather than
//! global state, and reach Discord only through the capabilities they are
//! handed (`Context`/`Http`), so their logic can be exercised with fakes.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability and interaction context
//! - `GUILD_MEMBERS` - Receive member join events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod sender;
pub mod start;
