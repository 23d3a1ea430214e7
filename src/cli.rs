//! Command-line interface definitions for News Listing.
//!
//! Every option can also be supplied through the environment.

use clap::Parser;
use news_listing::FetchConfig;
use std::time::Duration;

/// Guardian content API search with the public developer key.
pub const DEFAULT_URL: &str =
    "https://content.guardianapis.com/search?order-by=newest&page-size=20&api-key=test";

/// Command-line arguments for the News Listing application.
///
/// # Examples
///
/// ```sh
/// # Print the default listing
/// news_listing
///
/// # Another endpoint, written as JSON
/// news_listing --url "https://content.guardianapis.com/search?q=rust&api-key=test" -j ./out/news.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// URL of the JSON news listing endpoint
    #[arg(short, long, env = "NEWS_API_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Connect timeout in milliseconds
    #[arg(long, env = "NEWS_CONNECT_TIMEOUT_MS", default_value_t = 15_000)]
    pub connect_timeout_ms: u64,

    /// Read timeout in milliseconds
    #[arg(long, env = "NEWS_READ_TIMEOUT_MS", default_value_t = 10_000)]
    pub read_timeout_ms: u64,

    /// Write the articles to this JSON file instead of printing them
    #[arg(short, long)]
    pub json_output: Option<String>,
}

impl Cli {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            read_timeout: Duration::from_millis(self.read_timeout_ms),
        }
    }
}
