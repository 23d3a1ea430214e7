//! Background loading with a memoized result.
//!
//! A [`NewsLoader`] runs the pipeline on its own tokio task so the caller's
//! task (a UI loop, a request handler) is never blocked on the network. It
//! delivers the result once: asking again, for example after the owning
//! context restarts, returns the same articles without refetching until
//! [`NewsLoader::reset`] is called.

use crate::models::Article;
use crate::pipeline::NewsClient;
use tokio::sync::OnceCell;
use tracing::{debug, error, instrument};

#[derive(Debug)]
pub struct NewsLoader {
    url: Option<String>,
    client: NewsClient,
    result: OnceCell<Option<Vec<Article>>>,
}

impl NewsLoader {
    pub fn new(client: NewsClient, url: Option<String>) -> Self {
        Self {
            url,
            client,
            result: OnceCell::new(),
        }
    }

    /// Whether a result has already been delivered.
    pub fn is_loaded(&self) -> bool {
        self.result.initialized()
    }

    /// Load the listing in the background, or return the delivered result.
    ///
    /// A loader without a URL yields `None` and never touches the network.
    /// Concurrent callers share one in-flight load.
    #[instrument(level = "info", skip_all, fields(url = ?self.url))]
    pub async fn load(&self) -> Option<Vec<Article>> {
        let Some(url) = self.url.clone() else {
            debug!("No URL configured; nothing to load");
            return None;
        };
        let client = self.client.clone();

        self.result
            .get_or_init(|| async move {
                let task = tokio::spawn(async move { client.load_articles(&url).await });
                match task.await {
                    Ok(articles) => articles,
                    Err(e) => {
                        error!(error = %e, "Background load task failed");
                        None
                    }
                }
            })
            .await
            .clone()
    }

    /// Forget the delivered result so the next [`load`](Self::load) fetches again.
    pub fn reset(&mut self) {
        if self.result.take().is_some() {
            debug!("Cleared loaded news listing");
        }
    }
}
