//! Data models for news listing articles.
//!
//! - [`Article`]: one element of the API's `response.results` array
//!
//! Field names on the wire use the API's camelCase keys, so the serde
//! attributes rename rather than the Rust fields themselves.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// JSON key for an article's section label.
pub const KEY_SECTION: &str = "sectionName";
/// JSON key for an article's publication timestamp.
pub const KEY_DATE: &str = "webPublicationDate";
/// JSON key for an article's headline.
pub const KEY_TITLE: &str = "webTitle";
/// JSON key for an article's canonical link.
pub const KEY_WEB_URL: &str = "webUrl";

/// A single article from a news listing.
///
/// Every field is optional. A key missing from the source object is `None`,
/// while a key present with an empty string stays `Some("")`.
///
/// Records are built once by the parser and only read afterwards, so the
/// fields are private and exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Article {
    #[serde(rename = "sectionName")]
    section_name: Option<String>,
    #[serde(rename = "webPublicationDate")]
    publication_date: Option<String>,
    #[serde(rename = "webTitle")]
    title: Option<String>,
    #[serde(rename = "webUrl")]
    url: Option<String>,
}

impl Article {
    pub fn new(
        section_name: Option<String>,
        publication_date: Option<String>,
        title: Option<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            section_name,
            publication_date,
            title,
            url,
        }
    }

    /// The section (category) the article belongs to.
    pub fn section_name(&self) -> Option<&str> {
        self.section_name.as_deref()
    }

    /// The publication timestamp exactly as the API sent it.
    pub fn publication_date(&self) -> Option<&str> {
        self.publication_date.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Parse the publication date as an RFC 3339 timestamp.
    ///
    /// Returns `None` when the date is absent or not RFC 3339. The raw string
    /// is never validated at parse time; this is the read-side check.
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        self.publication_date
            .as_deref()
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
    }
}
