use super::*;
use crate::bot::handler::interaction::handle_command;

/// Tests `/welcome` with a channel in a guild.
///
/// Verifies the mapping is updated in memory, persisted to disk, and the
/// invoker receives a confirmation mentioning the channel.
///
/// Expected: confirmation reply and {"1001": "2002"} on disk
#[tokio::test]
async fn sets_and_persists_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = WelcomeStore::load(&test.config_path)?;

    let data = create_test_command_data("welcome", Some(2002));
    let reply = handle_command(&store, Some(GuildId::new(1001)), &data).await;

    assert_eq!(reply, "Welcome channel set to <#2002>");
    assert_eq!(store.get(GuildId::new(1001)).await, Some(ChannelId::new(2002)));

    let reloaded = WelcomeStore::load(&test.config_path)?;
    assert_eq!(
        reloaded.get(GuildId::new(1001)).await,
        Some(ChannelId::new(2002))
    );

    Ok(())
}

/// Tests `/welcome` overwriting a previously configured channel.
///
/// Expected: new channel replaces the old one
#[tokio::test]
async fn replaces_existing_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_welcome_channel("1001", "2002")
        .build()
        .unwrap();
    let store = WelcomeStore::load(&test.config_path)?;

    let data = create_test_command_data("welcome", Some(3003));
    handle_command(&store, Some(GuildId::new(1001)), &data).await;

    assert_eq!(store.get(GuildId::new(1001)).await, Some(ChannelId::new(3003)));
    assert_eq!(store.snapshot().await.welcome_channels.len(), 1);

    Ok(())
}

/// Tests `/welcome` without the channel option.
///
/// Verifies the invoker gets an error reply and nothing is written.
///
/// Expected: "Channel ID is required." and no config file
#[tokio::test]
async fn rejects_missing_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = WelcomeStore::load(&test.config_path)?;

    let data = create_test_command_data("welcome", None);
    let reply = handle_command(&store, Some(GuildId::new(1001)), &data).await;

    assert_eq!(reply, "Channel ID is required.");
    assert!(store.snapshot().await.welcome_channels.is_empty());
    assert!(!test.config_path.exists());

    Ok(())
}

/// Tests `/welcome` invoked outside a guild.
///
/// Expected: error reply and no mutation
#[tokio::test]
async fn rejects_invocation_outside_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = WelcomeStore::load(&test.config_path)?;

    let data = create_test_command_data("welcome", Some(2002));
    let reply = handle_command(&store, None, &data).await;

    assert_eq!(reply, "This command can only be used in a server.");
    assert!(store.snapshot().await.welcome_channels.is_empty());

    Ok(())
}

/// Tests an unrecognised command name.
///
/// Expected: "Unknown command." and no mutation
#[tokio::test]
async fn rejects_unknown_command() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = WelcomeStore::load(&test.config_path)?;

    let data = create_test_command_data("goodbye", Some(2002));
    let reply = handle_command(&store, Some(GuildId::new(1001)), &data).await;

    assert_eq!(reply, "Unknown command.");
    assert!(store.snapshot().await.welcome_channels.is_empty());

    Ok(())
}

/// Tests `/welcome` when the config file cannot be written.
///
/// The config path points at an existing directory so the final rename fails.
/// The invoker is told about the failure while the in-memory mapping keeps
/// the new channel.
///
/// Expected: "Error saving config: ..." reply, entry present in memory
#[tokio::test]
async fn reports_persist_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let blocked = test.path("blocked.json");
    std::fs::create_dir(&blocked).unwrap();
    let store = WelcomeStore::load(&blocked);

    // Loading a directory is an I/O error, so start from an empty store instead
    assert!(store.is_err());
    let store = WelcomeStore::new(&blocked);

    let data = create_test_command_data("welcome", Some(2002));
    let reply = handle_command(&store, Some(GuildId::new(1001)), &data).await;

    assert!(reply.starts_with("Error saving config:"));
    assert_eq!(store.get(GuildId::new(1001)).await, Some(ChannelId::new(2002)));

    Ok(())
}
