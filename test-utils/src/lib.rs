//! Welcomebot Test Utils
//!
//! Provides shared testing utilities for the welcome bot. This crate offers a builder
//! for creating test contexts backed by a temporary directory, optionally seeded with
//! a welcome config file, plus factories for the Serenity structs the bot's handlers
//! consume.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Temporary directory plus the config path inside it
//! - **TestError**: Error types that can occur during test setup
//! - **serenity**: Factories for `Member` and `CommandData`
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn loads_seeded_config() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_welcome_channel("1", "2")
//!         .build()?;
//!
//!     let store = WelcomeStore::load(&test.config_path)?;
//!     // Perform store operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
