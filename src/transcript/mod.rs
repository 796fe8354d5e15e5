//! Transcript module for Hent.
//!
//! Holds the caption data model, the fetch operation that packages every
//! outcome into a [`FetchResult`], and output formatting (JSON, SRT, VTT).

mod fetch;
mod format;
mod models;

pub use fetch::fetch_transcript;
pub use format::{format_result, OutputFormat};
pub use models::{FetchResult, RawCaption, TranscriptSegment};
