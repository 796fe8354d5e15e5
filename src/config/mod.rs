//! Configuration module for Hent.
//!
//! Handles loading application settings from the user's config directory.

mod settings;

pub use settings::{FetchSettings, GeneralSettings, Settings};
