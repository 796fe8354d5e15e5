//! Error types for Hent.

use thiserror::Error;

/// Library-level error type for Hent operations.
#[derive(Error, Debug)]
pub enum HentError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Video unavailable: {0}")]
    VideoUnavailable(String),

    #[error("Subtitles are disabled for video {0}")]
    TranscriptsDisabled(String),

    #[error("No transcript found for video {video_id} in languages [{languages}]")]
    NoTranscriptFound { video_id: String, languages: String },

    #[error("Failed to parse player response: {0}")]
    PlayerResponse(String),

    #[error("Failed to parse caption data: {0}")]
    CaptionData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid caption URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for Hent operations.
pub type Result<T> = std::result::Result<T, HentError>;
