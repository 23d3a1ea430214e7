//! Fetch-then-parse orchestration.
//!
//! [`NewsClient::load_articles`] is the one entry point a background loader
//! needs. It never fails: the caller sees either a list of articles or
//! `None` for "nothing to show".

use crate::error::FetchError;
use crate::fetcher::{FetchConfig, Fetcher};
use crate::models::Article;
use crate::notify::{NoopNotifier, Notifier};
use crate::parser;
use std::fmt;
use std::sync::Arc;
use tracing::{info, instrument};

/// A fetcher paired with the notifier its failures are reported to.
#[derive(Clone)]
pub struct NewsClient {
    fetcher: Fetcher,
    notifier: Arc<dyn Notifier>,
}

impl NewsClient {
    pub fn new(fetcher: Fetcher, notifier: Arc<dyn Notifier>) -> Self {
        Self { fetcher, notifier }
    }

    /// Default timeouts, failures only logged.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Ok(Self::new(
            Fetcher::new(FetchConfig::default())?,
            Arc::new(NoopNotifier),
        ))
    }

    /// Fetch `url_text` and decode the listing.
    ///
    /// Returns `None` without parsing if the fetch produced nothing.
    #[instrument(level = "info", skip_all, fields(url = %url_text))]
    pub async fn load_articles(&self, url_text: &str) -> Option<Vec<Article>> {
        let body = self.fetcher.fetch(url_text, self.notifier.as_ref()).await?;
        let articles = parser::parse(Some(&body), self.notifier.as_ref());
        info!(
            count = ?articles.as_ref().map(Vec::len),
            "Loaded news listing"
        );
        articles
    }
}

impl fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsClient")
            .field("fetcher", &self.fetcher)
            .finish_non_exhaustive()
    }
}

/// Load a listing with default timeouts and no notifications.
pub async fn load_articles(url_text: &str) -> Option<Vec<Article>> {
    match NewsClient::with_defaults() {
        Ok(client) => client.load_articles(url_text).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            None
        }
    }
}
