//! Hent - YouTube Transcript Fetcher
//!
//! A CLI tool for fetching YouTube video transcripts without downloading
//! any media. The name "Hent" comes from the Norwegian word for "fetch."
//!
//! # Overview
//!
//! Hent allows you to:
//! - Fetch the caption track of a YouTube video by URL or video ID
//! - Pick the caption language, preferring authored tracks over auto-generated ones
//! - Emit the transcript as a single JSON line, SRT, or WebVTT
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `cli` - Command-line parsing and terminal output
//! - `transcript` - Transcript data model, fetching, and output formatting
//! - `youtube` - YouTube caption retrieval (watch page scraping, timedtext)
//!
//! # Example
//!
//! ```rust,no_run
//! use hent::config::Settings;
//! use hent::transcript::fetch_transcript;
//! use hent::youtube::YoutubeTranscriptClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let client = YoutubeTranscriptClient::new(&settings.fetch)?;
//!
//!     let result = fetch_transcript(&client, "dQw4w9WgXcQ", &settings.fetch.languages).await;
//!     println!("{}", result.to_json_line());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod transcript;
pub mod youtube;

pub use error::{HentError, Result};
