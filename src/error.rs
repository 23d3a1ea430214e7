//! Error types for the fetch and parse stages.
//!
//! These never reach callers of [`crate::load_articles`]: the pipeline logs
//! them, optionally notifies, and turns them into `None` or a partial list.
//! They are public so the `try_*` variants can report what went wrong.

use crate::models::Article;
use thiserror::Error;

/// Notification text for a malformed request URL.
pub const MSG_URL: &str = "Error Creating URL";
/// Notification text for a network failure.
pub const MSG_FETCH: &str = "Problem retrieving the news JSON results";
/// Notification text for a malformed JSON document.
pub const MSG_PARSE: &str = "Problem parsing the news JSON results";

/// Failure while fetching the raw listing body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
}

impl FetchError {
    /// The short user-facing message for this failure, if it is one that
    /// gets surfaced through a [`crate::notify::Notifier`].
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            FetchError::InvalidUrl(_) => Some(MSG_URL),
            FetchError::Network(_) => Some(MSG_FETCH),
            FetchError::HttpStatus(_) => None,
        }
    }
}

/// What went wrong while decoding a listing document.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("malformed json: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("missing or mistyped key `{0}`")]
    MissingKey(&'static str),

    #[error("invalid result at index {index}: {reason}")]
    InvalidElement { index: usize, reason: String },
}

/// A document that could not be fully decoded.
///
/// `partial` holds the articles decoded before the failure, in order.
#[derive(Debug, Error)]
#[error("{kind} (after {} articles)", .partial.len())]
pub struct ParseError {
    #[source]
    pub kind: ParseErrorKind,
    pub partial: Vec<Article>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, partial: Vec<Article>) -> Self {
        Self { kind, partial }
    }

    pub fn into_partial(self) -> Vec<Article> {
        self.partial
    }
}
