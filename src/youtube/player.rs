//! Player response extraction and caption track selection.
//!
//! The watch page embeds a `ytInitialPlayerResponse` JSON object; only the
//! subset needed for caption lookup is deserialized here.

use crate::error::{HentError, Result};
use serde::Deserialize;

const PLAYER_RESPONSE_MARKER: &str = "ytInitialPlayerResponse";

/// The subset of YouTube's player response this crate reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    #[serde(default)]
    pub playability_status: Option<PlayabilityStatus>,
    #[serde(default)]
    pub captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayabilityStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captions {
    #[serde(default)]
    pub player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracklistRenderer {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

/// One entry from the page's `captionTracks` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    #[serde(default)]
    pub kind: Option<String>,
}

impl CaptionTrack {
    /// Whether this track is machine-generated (ASR) rather than authored.
    pub fn is_asr(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

impl PlayerResponse {
    /// Extract and parse the player response embedded in a watch page.
    pub fn from_watch_html(html: &str, video_id: &str) -> Result<Self> {
        let json = extract_json_object(html, PLAYER_RESPONSE_MARKER).ok_or_else(|| {
            HentError::PlayerResponse(format!("no player response found for video {}", video_id))
        })?;

        let response: PlayerResponse = serde_json::from_str(json)?;
        Ok(response)
    }

    /// Select the caption track for the first matching preferred language,
    /// preferring authored tracks over ASR within a language.
    pub fn select_track(&self, video_id: &str, languages: &[String]) -> Result<&CaptionTrack> {
        if let Some(status) = self.playability_status.as_ref().and_then(|p| p.status.as_deref()) {
            if status != "OK" {
                let reason = self
                    .playability_status
                    .as_ref()
                    .and_then(|p| p.reason.clone())
                    .unwrap_or_else(|| status.to_string());
                return Err(HentError::VideoUnavailable(format!(
                    "{} ({})",
                    video_id, reason
                )));
            }
        }

        let tracks = self
            .captions
            .as_ref()
            .and_then(|c| c.player_captions_tracklist_renderer.as_ref())
            .map(|r| r.caption_tracks.as_slice())
            .filter(|tracks| !tracks.is_empty())
            .ok_or_else(|| HentError::TranscriptsDisabled(video_id.to_string()))?;

        for lang in languages {
            let manual = tracks
                .iter()
                .find(|t| t.language_code == *lang && !t.is_asr());
            let any = manual.or_else(|| tracks.iter().find(|t| t.language_code == *lang));
            if let Some(track) = any {
                return Ok(track);
            }
        }

        Err(HentError::NoTranscriptFound {
            video_id: video_id.to_string(),
            languages: languages.join(", "),
        })
    }
}

/// Find `marker = {...}` in `html` and return the balanced JSON object.
fn extract_json_object<'a>(html: &'a str, marker: &str) -> Option<&'a str> {
    for (idx, _) in html.match_indices(marker) {
        let rest = html[idx + marker.len()..].trim_start();
        let Some(after_eq) = rest.strip_prefix('=') else {
            continue;
        };
        let body = after_eq.trim_start();
        if !body.starts_with('{') {
            continue;
        }
        if let Some(obj) = balanced_object(body) {
            return Some(obj);
        }
    }
    None
}

/// Return the `{...}` prefix of `s` with balanced braces. String literals
/// and escapes are respected so braces inside strings don't end the scan.
fn balanced_object(s: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in s.bytes().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[..=i]);
                }
            }
            _ => {}
        }
    }

    None
}
