use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};
use serenity::all::{ChannelId, GuildId};
use tokio::sync::Mutex;

use crate::error::store::StoreError;

/// On-disk representation of the welcome channel registry.
///
/// Keys are guild IDs and values are channel IDs, both stored as decimal
/// strings so the file stays readable and editable by hand.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WelcomeConfig {
    #[serde(default)]
    pub welcome_channels: HashMap<String, String>,
}

/// Shared, lock-guarded welcome channel registry backed by a JSON file.
///
/// Cloning is cheap: clones share the same mapping and lock. A single mutex
/// guards both the in-memory mapping and writes to the backing file, so a
/// lookup never interleaves with a half-finished update.
#[derive(Clone)]
pub struct WelcomeStore {
    path: Arc<PathBuf>,
    config: Arc<Mutex<WelcomeConfig>>,
}

impl WelcomeStore {
    /// Creates a store with an empty mapping that persists to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, WelcomeConfig::default())
    }

    fn with_config(path: impl Into<PathBuf>, config: WelcomeConfig) -> Self {
        Self {
            path: Arc::new(path.into()),
            config: Arc::new(Mutex::new(config)),
        }
    }

    /// Loads the registry from `path`.
    ///
    /// A missing file is not an error and yields an empty mapping.
    ///
    /// # Returns
    /// - `Ok(WelcomeStore)` - Store holding the decoded (or empty) mapping
    /// - `Err(StoreError::Decode)` - File exists but is not valid JSON for the registry
    /// - `Err(StoreError::Io)` - File exists but could not be read
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "No welcome config at {}, starting with an empty mapping",
                    path.display()
                );
                return Ok(Self::new(path));
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let config: WelcomeConfig = match serde_json::from_str(&data) {
            Ok(config) => config,
            Err(source) => return Err(StoreError::Decode { path, source }),
        };

        tracing::info!(
            "Loaded {} welcome channel(s) from {}",
            config.welcome_channels.len(),
            path.display()
        );

        Ok(Self::with_config(path, config))
    }

    /// Looks up the welcome channel configured for a guild.
    ///
    /// Entries that do not parse as a channel ID (e.g. a hand-edited file) are
    /// treated as unset.
    pub async fn get(&self, guild_id: GuildId) -> Option<ChannelId> {
        let config = self.config.lock().await;
        let raw = config.welcome_channels.get(&guild_id.to_string())?;

        let channel_id = parse_channel_id(raw);
        if channel_id.is_none() {
            tracing::warn!(
                "Ignoring invalid welcome channel '{}' for guild {}",
                raw,
                guild_id
            );
        }
        channel_id
    }

    /// Upserts the welcome channel for a guild without persisting.
    ///
    /// Callers must call `save` afterwards; prefer `set_and_save` when the
    /// change should reach disk.
    pub async fn set(&self, guild_id: GuildId, channel_id: ChannelId) {
        let mut config = self.config.lock().await;
        config
            .welcome_channels
            .insert(guild_id.to_string(), channel_id.to_string());
    }

    /// Writes the current mapping to the backing file.
    pub async fn save(&self) -> Result<(), StoreError> {
        let config = self.config.lock().await;
        write_atomic(&self.path, &config)
    }

    /// Upserts the welcome channel for a guild and persists the mapping.
    ///
    /// The lock is held across the whole update and write, so concurrent
    /// updates never persist a mapping missing another update. If the write
    /// fails the in-memory entry is kept; the file is left stale until the
    /// next successful save.
    pub async fn set_and_save(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Result<(), StoreError> {
        let mut config = self.config.lock().await;
        config
            .welcome_channels
            .insert(guild_id.to_string(), channel_id.to_string());

        write_atomic(&self.path, &config)
    }

    /// Returns a copy of the current mapping.
    pub async fn snapshot(&self) -> WelcomeConfig {
        self.config.lock().await.clone()
    }
}

fn parse_channel_id(raw: &str) -> Option<ChannelId> {
    raw.parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(ChannelId::new)
}

/// Writes the mapping to a sibling temp file, then renames it over `path`.
///
/// Readers of `path` see either the previous or the new document, never a
/// partial write.
fn write_atomic(path: &Path, config: &WelcomeConfig) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let data = serde_json::to_string_pretty(config).map_err(StoreError::Encode)?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, data).map_err(io_error(&tmp))?;
    std::fs::rename(&tmp, path).map_err(io_error(path))?;

    Ok(())
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}
