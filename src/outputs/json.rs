//! JSON output of a loaded listing.
//!
//! Articles are written as an array using the API's own key names, with
//! `null` for absent fields.

use news_listing::Article;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `articles` to `path`, creating parent directories as needed.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_articles(articles: &[Article], path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(articles)?;

    if let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!(count = articles.len(), "Wrote JSON listing");
    Ok(())
}
