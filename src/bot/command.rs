//! Slash command definitions registered with Discord at startup.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

/// Name of the command that sets a guild's welcome channel.
pub const WELCOME_COMMAND: &str = "welcome";

/// Name of the `/welcome` command's channel option.
pub const CHANNEL_OPTION: &str = "channel";

/// Builds the `/welcome <channel>` command definition.
///
/// The command takes one required channel option and is only visible to
/// members with the Manage Server permission by default.
pub fn welcome_command() -> CreateCommand {
    CreateCommand::new(WELCOME_COMMAND)
        .description("Set the welcome channel")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                CHANNEL_OPTION,
                "The channel to send welcome messages",
            )
            .required(true),
        )
}
