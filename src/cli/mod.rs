//! CLI module for Hent.

mod output;

pub use output::Output;

use clap::Parser;

/// Hent - YouTube Transcript Fetcher
///
/// Fetches the transcript for a YouTube video and prints it as a single JSON
/// line. The name "Hent" comes from the Norwegian word for "fetch."
#[derive(Parser, Debug)]
#[command(name = "hent")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// YouTube video URL or ID
    pub video: Option<String>,

    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Preferred caption languages in priority order (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Output format (json, srt, vtt)
    #[arg(long, default_value = "json")]
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["hent", "dQw4w9WgXcQ"]).unwrap();
        assert_eq!(cli.video.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(cli.format, "json");
        assert!(cli.lang.is_empty());
    }

    #[test]
    fn test_parse_no_video() {
        let cli = Cli::try_parse_from(["hent"]).unwrap();
        assert!(cli.video.is_none());
    }

    #[test]
    fn test_parse_lang_list() {
        let cli = Cli::try_parse_from(["hent", "--lang", "de,en", "abc"]).unwrap();
        assert_eq!(cli.lang, vec!["de".to_string(), "en".to_string()]);
    }
}
