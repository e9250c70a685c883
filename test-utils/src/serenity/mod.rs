//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's gateway would deliver to the bot's handlers.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects
//! - `command::create_test_command_data` - Create slash command payloads

pub mod command;
pub mod member;

pub use command::create_test_command_data;
pub use member::create_test_member;
