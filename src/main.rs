//! # News Listing
//!
//! Load one news listing and print it, or write it as JSON.
//!
//! ## Usage
//!
//! ```sh
//! news_listing --url "https://content.guardianapis.com/search?api-key=test"
//! news_listing -j ./json/news.json
//! ```
//!
//! The listing is loaded on a background task through a
//! [`NewsLoader`]; failures surface as log warnings and an empty listing.

use clap::Parser;
use news_listing::{Fetcher, LogNotifier, NewsClient, NewsLoader};
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod outputs;

use cli::Cli;
use outputs::{json, text};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("news_listing starting up");

    let args = Cli::parse();
    debug!(url = %args.url, ?args.json_output, "Parsed CLI arguments");

    let fetcher = Fetcher::new(args.fetch_config())?;
    let client = NewsClient::new(fetcher, Arc::new(LogNotifier));
    let loader = NewsLoader::new(client, Some(args.url.clone()));

    let articles = match loader.load().await {
        Some(articles) => articles,
        None => {
            warn!(url = %args.url, "No news listing available");
            Vec::new()
        }
    };
    info!(count = articles.len(), "Loaded articles");

    match &args.json_output {
        Some(path) => json::write_articles(&articles, path).await?,
        None => print!("{}", text::render(&articles)),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
