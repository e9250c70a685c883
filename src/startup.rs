use dioxus_logger::tracing;

use crate::{config::Config, error::AppError, store::WelcomeStore};

/// Loads environment variables from a `.env` file in the working directory.
///
/// The file is optional. A file that exists but cannot be parsed is fatal.
///
/// # Returns
/// - `Ok(())` - File loaded, or no file present
/// - `Err(AppError::DotenvErr)` - File present but malformed or unreadable
pub fn load_env_file() -> Result<(), AppError> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Loads the per-guild welcome channel registry from the configured path.
///
/// # Arguments
/// - `config` - Application configuration containing the registry path
///
/// # Returns
/// - `Ok(WelcomeStore)` - Loaded registry, empty if the file does not exist
/// - `Err(AppError::StoreErr)` - File exists but is malformed or unreadable
pub fn load_welcome_store(config: &Config) -> Result<WelcomeStore, AppError> {
    Ok(WelcomeStore::load(&config.welcome_config_path)?)
}
