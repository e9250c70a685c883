use super::*;

/// Tests that `set` followed by `get` returns the channel.
///
/// Expected: Some(channel) for the guild, None for others
#[tokio::test]
async fn get_returns_set_channel() {
    let store = WelcomeStore::new("unused.json");

    store.set(GuildId::new(1001), ChannelId::new(2002)).await;

    assert_eq!(store.get(GuildId::new(1001)).await, Some(ChannelId::new(2002)));
    assert_eq!(store.get(GuildId::new(9999)).await, None);
}

/// Tests that `set` on an existing guild replaces the channel.
///
/// Expected: latest channel wins, single entry
#[tokio::test]
async fn set_overwrites_existing_channel() {
    let store = WelcomeStore::new("unused.json");

    store.set(GuildId::new(1001), ChannelId::new(2002)).await;
    store.set(GuildId::new(1001), ChannelId::new(3003)).await;

    assert_eq!(store.get(GuildId::new(1001)).await, Some(ChannelId::new(3003)));
    assert_eq!(store.snapshot().await.welcome_channels.len(), 1);
}

/// Tests concurrent `set` calls on distinct guilds followed by one save.
///
/// Clones of the store share the same mapping, so every task's update must be
/// present in the persisted document.
///
/// Expected: reloaded mapping contains all entries
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sets_are_not_lost() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = WelcomeStore::load(&test.config_path)?;

    let tasks: Vec<_> = (1..=16u64)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .set(GuildId::new(1000 + i), ChannelId::new(2000 + i))
                    .await;
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    store.save().await?;

    let reloaded = WelcomeStore::load(&test.config_path)?;
    let config = reloaded.snapshot().await;
    assert_eq!(config.welcome_channels.len(), 16);
    for i in 1..=16u64 {
        assert_eq!(
            reloaded.get(GuildId::new(1000 + i)).await,
            Some(ChannelId::new(2000 + i))
        );
    }

    Ok(())
}

/// Tests concurrent `set_and_save` calls on distinct guilds.
///
/// Each call persists under the lock, so the final file holds every entry.
///
/// Expected: reloaded mapping contains all entries
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_set_and_save_persists_all() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = WelcomeStore::load(&test.config_path)?;

    let tasks: Vec<_> = (1..=8u64)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .set_and_save(GuildId::new(1000 + i), ChannelId::new(2000 + i))
                    .await
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap()?;
    }

    let reloaded = WelcomeStore::load(&test.config_path)?;
    assert_eq!(reloaded.snapshot().await.welcome_channels.len(), 8);

    Ok(())
}
