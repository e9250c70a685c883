//! Test factory for creating slash command payloads.

use serenity::all::CommandData;

/// Creates the data of a chat-input command invocation.
///
/// When `channel_id` is `Some`, a single channel-typed option named `channel`
/// is attached, matching what Discord sends for `/welcome channel:#...`.
///
/// # Arguments
/// - `name` - Command name
/// - `channel_id` - Value of the `channel` option, if supplied
///
/// # Panics
/// - If the JSON cannot be deserialized into CommandData (indicates invalid test data)
pub fn create_test_command_data(name: &str, channel_id: Option<u64>) -> CommandData {
    let options = match channel_id {
        Some(id) => serde_json::json!([{
            "name": "channel",
            "type": 7,
            "value": id.to_string(),
        }]),
        None => serde_json::json!([]),
    };

    serde_json::from_value(serde_json::json!({
        "id": "900000000000000000",
        "name": name,
        "type": 1,
        "options": options,
    }))
    .expect("Failed to create test command data - invalid JSON structure")
}
