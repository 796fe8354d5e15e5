//! The transcript fetch operation.

use super::{FetchResult, TranscriptSegment};
use crate::youtube::TranscriptSource;
use tracing::{debug, warn};

/// Fetch a transcript and package the outcome as a [`FetchResult`].
///
/// Every error from retrieval or conversion is downgraded to the failure
/// variant here; nothing propagates to the caller.
pub async fn fetch_transcript<S>(source: &S, video_id: &str, languages: &[String]) -> FetchResult
where
    S: TranscriptSource + ?Sized,
{
    match source.fetch(video_id, languages).await {
        Ok(captions) => {
            debug!("Fetched {} caption cues", captions.len());
            let segments: Vec<TranscriptSegment> =
                captions.into_iter().map(TranscriptSegment::from).collect();
            FetchResult::success(segments)
        }
        Err(e) => {
            warn!("Transcript fetch failed: {}", e);
            FetchResult::failure(e)
        }
    }
}
