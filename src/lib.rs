//! # News Listing
//!
//! Fetch a news listing from a JSON API and decode it into [`Article`]
//! records.
//!
//! ## Pipeline
//!
//! 1. **Fetching**: GET the listing URL with bounded timeouts ([`fetcher`])
//! 2. **Parsing**: decode `response.results` into articles ([`parser`])
//! 3. **Orchestration**: compose both, never failing ([`pipeline`])
//!
//! Failures are logged with `tracing`, optionally surfaced through a
//! [`notify::Notifier`], and become `None` (or a partial list for a
//! malformed document). [`loader::NewsLoader`] runs the pipeline in the
//! background and memoizes its result.
//!
//! ```no_run
//! # async fn run() {
//! let url = "https://content.guardianapis.com/search?api-key=test";
//! if let Some(articles) = news_listing::load_articles(url).await {
//!     for article in &articles {
//!         println!("{}", article.title().unwrap_or("-"));
//!     }
//! }
//! # }
//! ```

pub mod error;
pub mod fetcher;
pub mod loader;
pub mod models;
pub mod notify;
pub mod parser;
pub mod pipeline;
pub mod utils;

pub use error::{FetchError, ParseError, ParseErrorKind};
pub use fetcher::{FetchConfig, Fetcher};
pub use loader::NewsLoader;
pub use models::Article;
pub use notify::{ChannelNotifier, LogNotifier, NoopNotifier, Notifier};
pub use pipeline::{NewsClient, load_articles};
