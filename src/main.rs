//! Hent CLI entry point.

use anyhow::Result;
use clap::Parser;
use hent::cli::{Cli, Output};
use hent::config::Settings;
use hent::transcript::{fetch_transcript, format_result, FetchResult, OutputFormat};
use hent::youtube::YoutubeTranscriptClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Usage errors: JSON error line on stdout, exit 1. Everything past this
    // point exits 0 and reports failures through the payload instead.
    let Some(video) = cli.video.clone() else {
        Output::error("No video ID provided");
        println!(
            "{}",
            FetchResult::failure("No video ID provided").to_json_line()
        );
        std::process::exit(1);
    };

    let format = match cli.format.parse::<OutputFormat>() {
        Ok(format) => format,
        Err(e) => {
            Output::error(&e);
            println!("{}", FetchResult::failure(&e).to_json_line());
            std::process::exit(1);
        }
    };

    let settings = load_settings(&cli);

    // Initialize logging. Logs go to stderr; stdout carries the payload.
    let log_level = match cli.verbose {
        0 => settings
            .as_ref()
            .map(|s| s.general.log_level.clone())
            .unwrap_or_else(|_| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("hent={}", log_level)),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let result = match settings {
        Ok(settings) => run(&cli, &video, settings).await,
        Err(e) => FetchResult::failure(e),
    };

    println!("{}", format_result(&result, format));

    Ok(())
}

/// Everything after argument validation. Failures fold into the failure
/// payload rather than a non-zero exit.
async fn run(cli: &Cli, video: &str, settings: Settings) -> FetchResult {
    let languages = if cli.lang.is_empty() {
        settings.fetch.languages.clone()
    } else {
        cli.lang.clone()
    };

    let client = match YoutubeTranscriptClient::new(&settings.fetch) {
        Ok(client) => client,
        Err(e) => return FetchResult::failure(e),
    };

    let spinner = Output::spinner("Fetching transcript...");
    let result = fetch_transcript(&client, video, &languages).await;
    spinner.finish_and_clear();

    result
}

fn load_settings(cli: &Cli) -> hent::Result<Settings> {
    match &cli.config {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            if !path.exists() {
                Output::warning(&format!(
                    "Config file {} not found, using defaults",
                    path.display()
                ));
            }
            Settings::load_from(Some(&path))
        }
        None => Settings::load(),
    }
}
