use std::collections::BTreeMap;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with an optional seeded config file.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_welcome_channel("111", "222")
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Name of the config file inside the temporary directory.
    file_name: String,

    /// Entries written as a well-formed `welcome_channels` document.
    channels: BTreeMap<String, String>,

    /// Raw file content, takes precedence over `channels` when set.
    raw: Option<String>,
}

impl TestBuilder {
    /// Creates a new builder that writes no config file.
    pub fn new() -> Self {
        Self {
            file_name: "config.json".to_string(),
            channels: BTreeMap::new(),
            raw: None,
        }
    }

    /// Seeds the config file with a guild to channel entry.
    ///
    /// Chain multiple calls to seed several guilds.
    pub fn with_welcome_channel(mut self, guild_id: &str, channel_id: &str) -> Self {
        self.channels
            .insert(guild_id.to_string(), channel_id.to_string());
        self
    }

    /// Seeds the config file with arbitrary content, e.g. malformed JSON.
    pub fn with_raw_config(mut self, content: &str) -> Self {
        self.raw = Some(content.to_string());
        self
    }

    /// Places the config file at a relative path inside the temporary directory.
    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    /// Creates the temporary directory and writes the seed file if any.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose `config_path` points at the (possibly absent) file
    /// - `Err(TestError)` - Failed to create the directory or write the seed file
    pub fn build(self) -> Result<TestContext, TestError> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join(&self.file_name);

        let content = match self.raw {
            Some(raw) => Some(raw),
            None if !self.channels.is_empty() => Some(serde_json::to_string_pretty(
                &serde_json::json!({ "welcome_channels": self.channels }),
            )?),
            None => None,
        };

        if let Some(content) = content {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&config_path, content)?;
        }

        Ok(TestContext { dir, config_path })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
