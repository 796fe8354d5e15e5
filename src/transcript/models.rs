//! Data models for transcripts.

use serde::{Deserialize, Serialize};

/// A single caption cue as delivered by a transcript source, with timing
/// in fractional seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCaption {
    /// Caption text.
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
}

/// A single transcript segment with timing in integer milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Transcribed text content.
    pub text: String,
    /// Start offset in milliseconds.
    pub offset: u64,
    /// Duration in milliseconds.
    pub duration: u64,
}

impl TranscriptSegment {
    /// End offset of this segment in milliseconds.
    pub fn end(&self) -> u64 {
        self.offset + self.duration
    }
}

impl From<RawCaption> for TranscriptSegment {
    /// Truncates rather than rounds, per integer-cast semantics.
    fn from(raw: RawCaption) -> Self {
        Self {
            text: raw.text,
            offset: (raw.start * 1000.0) as u64,
            duration: (raw.duration * 1000.0) as u64,
        }
    }
}

/// The success/error envelope emitted once per invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FetchResult {
    /// Transcript retrieved; segments are in chronological source order.
    Success {
        success: bool,
        segments: Vec<TranscriptSegment>,
    },
    /// Retrieval failed; the error message replaces the segments.
    Failure { success: bool, error: String },
}

impl FetchResult {
    /// Build a success result.
    pub fn success(segments: Vec<TranscriptSegment>) -> Self {
        FetchResult::Success {
            success: true,
            segments,
        }
    }

    /// Build a failure result from any displayable error.
    pub fn failure(error: impl ToString) -> Self {
        FetchResult::Failure {
            success: false,
            error: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success { .. })
    }

    /// Serialize to a single JSON line.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"success":false,"error":"serialization failed"}"#.to_string())
    }
}
