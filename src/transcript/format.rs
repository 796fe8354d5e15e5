//! Transcript output formatting (JSON, SRT, VTT).
//!
//! JSON is the default envelope; SRT and VTT are offered for integration
//! with subtitle tooling.

use super::{FetchResult, TranscriptSegment};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Json,
    Srt,
    Vtt,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "srt" => Ok(OutputFormat::Srt),
            "vtt" | "webvtt" => Ok(OutputFormat::Vtt),
            _ => Err(format!("Unknown format: {}. Use json, srt, or vtt.", s)),
        }
    }
}

/// Render a fetch result for output.
///
/// SRT and VTT apply to the success payload only; failures always render
/// as the single-line JSON envelope.
pub fn format_result(result: &FetchResult, format: OutputFormat) -> String {
    match (result, format) {
        (FetchResult::Success { segments, .. }, OutputFormat::Srt) => format_srt(segments),
        (FetchResult::Success { segments, .. }, OutputFormat::Vtt) => format_vtt(segments),
        _ => result.to_json_line(),
    }
}

/// Format as SRT (SubRip).
fn format_srt(segments: &[TranscriptSegment]) -> String {
    let mut output = String::new();

    for (i, segment) in segments.iter().enumerate() {
        // Sequence number (1-indexed)
        output.push_str(&format!("{}\n", i + 1));

        // Timestamps: 00:00:00,000 --> 00:00:00,000
        output.push_str(&format!(
            "{} --> {}\n",
            format_srt_timestamp(segment.offset),
            format_srt_timestamp(segment.end())
        ));

        // Text
        output.push_str(&segment.text);
        output.push_str("\n\n");
    }

    output
}

/// Format as WebVTT.
fn format_vtt(segments: &[TranscriptSegment]) -> String {
    let mut output = String::from("WEBVTT\n\n");

    for (i, segment) in segments.iter().enumerate() {
        // Optional cue identifier
        output.push_str(&format!("{}\n", i + 1));

        // Timestamps: 00:00:00.000 --> 00:00:00.000
        output.push_str(&format!(
            "{} --> {}\n",
            format_vtt_timestamp(segment.offset),
            format_vtt_timestamp(segment.end())
        ));

        // Text
        output.push_str(&segment.text);
        output.push_str("\n\n");
    }

    output
}

/// Format timestamp for SRT (00:00:00,000).
fn format_srt_timestamp(total_ms: u64) -> String {
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, ms)
}

/// Format timestamp for VTT (00:00:00.000).
fn format_vtt_timestamp(total_ms: u64) -> String {
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> FetchResult {
        FetchResult::success(vec![
            TranscriptSegment {
                text: "Hello world.".to_string(),
                offset: 0,
                duration: 2500,
            },
            TranscriptSegment {
                text: "This is a test.".to_string(),
                offset: 2500,
                duration: 2500,
            },
        ])
    }

    #[test]
    fn test_format_json() {
        let json = format_result(&sample_result(), OutputFormat::Json);
        assert!(json.starts_with(r#"{"success":true,"#));
        assert!(json.contains("Hello world."));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_format_srt() {
        let srt = format_result(&sample_result(), OutputFormat::Srt);
        assert!(srt.contains("1\n00:00:00,000 --> 00:00:02,500"));
        assert!(srt.contains("2\n00:00:02,500 --> 00:00:05,000"));
        assert!(srt.contains("Hello world."));
    }

    #[test]
    fn test_format_vtt() {
        let vtt = format_result(&sample_result(), OutputFormat::Vtt);
        assert!(vtt.starts_with("WEBVTT"));
        assert!(vtt.contains("00:00:00.000 --> 00:00:02.500"));
    }

    #[test]
    fn test_failure_always_renders_json() {
        let failure = FetchResult::failure("boom");
        for format in [OutputFormat::Json, OutputFormat::Srt, OutputFormat::Vtt] {
            assert_eq!(
                format_result(&failure, format),
                r#"{"success":false,"error":"boom"}"#
            );
        }
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("srt".parse::<OutputFormat>().unwrap(), OutputFormat::Srt);
        assert_eq!("vtt".parse::<OutputFormat>().unwrap(), OutputFormat::Vtt);
        assert_eq!("webvtt".parse::<OutputFormat>().unwrap(), OutputFormat::Vtt);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_srt_timestamp() {
        assert_eq!(format_srt_timestamp(0), "00:00:00,000");
        assert_eq!(format_srt_timestamp(61_500), "00:01:01,500");
        assert_eq!(format_srt_timestamp(3_661_123), "01:01:01,123");
    }
}
