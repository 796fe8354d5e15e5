//! YouTube transcript retrieval.
//!
//! Scrapes the watch page for the embedded player response, picks the
//! caption track matching the requested languages, and downloads it as
//! timedtext XML. No media is downloaded.

mod player;
mod timedtext;

pub use player::{CaptionTrack, PlayerResponse};

use crate::config::FetchSettings;
use crate::error::{HentError, Result};
use crate::transcript::RawCaption;
use async_trait::async_trait;
use regex::Regex;
use std::time::Duration;
use tracing::{debug, instrument};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Trait for transcript providers.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the caption cues for a video in the first matching language.
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Vec<RawCaption>>;
}

/// YouTube transcript client.
pub struct YoutubeTranscriptClient {
    http: reqwest::Client,
    video_id_regex: Regex,
}

impl YoutubeTranscriptClient {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent(settings.user_agent.clone())
            .build()?;

        // Matches various YouTube URL formats and bare video IDs
        let video_id_regex = Regex::new(
            r"(?x)
            (?:
                # Full YouTube URLs
                (?:https?://)?
                (?:www\.|m\.)?
                (?:youtube\.com/(?:watch\?v=|embed/|v/|shorts/|live/)|youtu\.be/)
                ([a-zA-Z0-9_-]{11})
            )
            |
            # Bare video ID (11 characters)
            ^([a-zA-Z0-9_-]{11})$
        ",
        )
        .expect("Invalid regex");

        Ok(Self {
            http,
            video_id_regex,
        })
    }

    /// Extract video ID from a YouTube URL or bare ID.
    fn extract_video_id(&self, input: &str) -> Option<String> {
        let caps = self.video_id_regex.captures(input.trim())?;

        // Try group 1 (URL format) then group 2 (bare ID)
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    }

    /// Normalize input to a video ID.
    ///
    /// Recognized URL forms have the ID extracted; anything else passes
    /// through verbatim and YouTube's own rejection surfaces as an error.
    fn normalize_input(&self, input: &str) -> Result<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(HentError::InvalidInput("empty video ID".to_string()));
        }

        Ok(self
            .extract_video_id(trimmed)
            .unwrap_or_else(|| trimmed.to_string()))
    }

    #[instrument(skip(self))]
    async fn fetch_watch_page(&self, video_id: &str) -> Result<String> {
        let url = format!("{}{}", WATCH_URL, video_id);
        debug!("Fetching watch page");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US")
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptClient {
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Vec<RawCaption>> {
        let video_id = self.normalize_input(video_id)?;

        let html = self.fetch_watch_page(&video_id).await?;
        let player = PlayerResponse::from_watch_html(&html, &video_id)?;
        let track = player.select_track(&video_id, languages)?;
        debug!(
            language = %track.language_code,
            asr = track.is_asr(),
            "Selected caption track"
        );

        let xml = timedtext::download(&self.http, &track.base_url).await?;
        timedtext::parse(&xml)
    }
}
