//! Timedtext caption download and parsing.
//!
//! Caption tracks come back as XML cues with fractional-second timing:
//! `<text start="5.28" dur="2.62">Hello &amp;amp; welcome</text>`.

use crate::error::{HentError, Result};
use crate::transcript::RawCaption;
use regex::{Captures, Regex};
use url::Url;

/// Download the raw timedtext XML for a caption track.
pub async fn download(http: &reqwest::Client, base_url: &str) -> Result<String> {
    let url = Url::parse(base_url)?;
    let response = http.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}

/// Parse timedtext XML into caption cues, in order of appearance.
///
/// `dur` may be absent (last cue on some tracks) and defaults to 0. Cues
/// whose text is empty after unescaping are dropped.
pub fn parse(xml: &str) -> Result<Vec<RawCaption>> {
    let cue_regex = Regex::new(r"(?s)<text\s([^>]*)>(.*?)</text>").expect("Invalid regex");
    let attr_regex = Regex::new(r#"([\w:-]+)="([^"]*)""#).expect("Invalid regex");

    let mut captions = Vec::new();

    for cue in cue_regex.captures_iter(xml) {
        let mut start: Option<f64> = None;
        let mut duration: f64 = 0.0;

        for attr in attr_regex.captures_iter(&cue[1]) {
            match &attr[1] {
                "start" => start = attr[2].parse().ok(),
                "dur" => duration = attr[2].parse().unwrap_or(0.0),
                _ => {}
            }
        }

        let start = start.ok_or_else(|| {
            HentError::CaptionData("caption cue missing start attribute".to_string())
        })?;

        let text = unescape(&strip_tags(&cue[2]));
        if text.is_empty() {
            continue;
        }

        captions.push(RawCaption {
            text,
            start,
            duration,
        });
    }

    Ok(captions)
}

/// Strip inline markup (`<font ...>`, `<b>`, ...) from a cue body.
fn strip_tags(text: &str) -> String {
    let tag_regex = Regex::new(r"<[^>]*>").expect("Invalid regex");
    tag_regex.replace_all(text, "").to_string()
}

/// Decode HTML entities, named and numeric.
fn unescape(text: &str) -> String {
    let entity_regex = Regex::new(r"&(#[xX]?[0-9a-fA-F]+|[a-zA-Z]+);").expect("Invalid regex");

    let decoded = entity_regex.replace_all(text, |caps: &Captures| {
        let entity = &caps[1];
        let replacement = match entity {
            "amp" => Some("&".to_string()),
            "lt" => Some("<".to_string()),
            "gt" => Some(">".to_string()),
            "quot" => Some("\"".to_string()),
            "apos" => Some("'".to_string()),
            "nbsp" => Some("\u{a0}".to_string()),
            _ => decode_numeric_entity(entity),
        };

        // Unknown entities are kept verbatim
        replacement.unwrap_or_else(|| caps[0].to_string())
    });

    decoded.trim().to_string()
}

fn decode_numeric_entity(entity: &str) -> Option<String> {
    let code = if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        entity.strip_prefix('#')?.parse().ok()?
    };

    char::from_u32(code).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = concat!(
        r#"<?xml version="1.0" encoding="utf-8" ?><transcript>"#,
        r#"<text start="0.5" dur="2.25">Hello</text>"#,
        "\n",
        r#"<text start="2.75" dur="1.5">Tom &amp;amp; Jerry &#39;live&#39;</text>"#,
        "\n",
        r##"<text start="4.25"><font color="#CCCCCC">styled</font> text</text>"##,
        "\n",
        r#"<text start="9.0" dur="1.0">   </text>"#,
        "</transcript>",
    );

    #[test]
    fn test_parse_cues_in_order() {
        let captions = parse(SAMPLE).unwrap();

        assert_eq!(captions.len(), 3);
        assert_eq!(captions[0].text, "Hello");
        assert_eq!(captions[0].start, 0.5);
        assert_eq!(captions[0].duration, 2.25);
        assert_eq!(captions[1].start, 2.75);
        assert_eq!(captions[2].text, "styled text");
    }

    #[test]
    fn test_parse_double_escaped_entities() {
        // YouTube double-escapes inside the XML: &amp;amp; -> &amp; -> &
        let captions = parse(SAMPLE).unwrap();
        assert_eq!(captions[1].text, "Tom &amp; Jerry 'live'");
    }

    #[test]
    fn test_missing_dur_defaults_to_zero() {
        let captions = parse(SAMPLE).unwrap();
        assert_eq!(captions[2].duration, 0.0);
    }

    #[test]
    fn test_whitespace_only_cues_dropped() {
        let captions = parse(SAMPLE).unwrap();
        assert!(captions.iter().all(|c| !c.text.is_empty()));
    }

    #[test]
    fn test_empty_track_is_empty_transcript() {
        let captions = parse("<transcript></transcript>").unwrap();
        assert!(captions.is_empty());
    }

    #[test]
    fn test_missing_start_is_an_error() {
        let err = parse(r#"<text dur="1.0">hi</text>"#).unwrap_err();
        assert!(err.to_string().contains("start"));
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("a &lt;b&gt; &quot;c&quot;"), "a <b> \"c\"");
        assert_eq!(unescape("&#x27;hi&#x27;"), "'hi'");
        assert_eq!(unescape("&#8230;"), "\u{2026}");
        // Unknown entities survive
        assert_eq!(unescape("&bogus;"), "&bogus;");
    }
}
