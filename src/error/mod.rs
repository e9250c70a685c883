//! Error types for the welcome bot.
//!
//! `AppError` is the top-level error returned from startup. Anything that
//! reaches `main` as an `AppError` is fatal: it is logged and the process
//! exits. Runtime failures inside event handlers are logged or reported back
//! to the invoking user instead of being propagated.

pub mod config;
pub mod store;

use thiserror::Error;

use crate::error::{config::ConfigError, store::StoreError};

/// Top-level application error type.
///
/// Aggregates all errors that can occur while bootstrapping the bot. Most
/// variants use `#[from]` so startup code can propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while reading environment variables.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure to load or persist the welcome channel file.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// The `.env` file exists but could not be parsed.
    #[error("Error loading .env file: {0}")]
    DotenvErr(#[from] dotenvy::Error),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
