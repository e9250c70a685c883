//! Persistent per-guild welcome channel registry.
//!
//! The registry is a flat JSON file mapping guild IDs to the channel that
//! receives welcome messages. It is loaded once at startup and rewritten after
//! every change made through the `/welcome` command.

pub mod welcome;

pub use welcome::{WelcomeConfig, WelcomeStore};

#[cfg(test)]
mod test;
