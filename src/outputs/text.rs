//! Plain-text rendering of a loaded listing.

use chrono::Utc;
use news_listing::Article;

const MISSING: &str = "-";

/// Render one article as `[Section] date  Title <url>`.
///
/// Dates that parse as RFC 3339 are shown in UTC as `YYYY-MM-DD HH:MM`;
/// anything else is shown verbatim. Absent fields render as `-`.
pub fn article_line(article: &Article) -> String {
    let date = match article.published_at() {
        Some(ts) => ts.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string(),
        None => article.publication_date().unwrap_or(MISSING).to_string(),
    };
    format!(
        "[{}] {}  {} <{}>",
        article.section_name().unwrap_or(MISSING),
        date,
        article.title().unwrap_or(MISSING),
        article.url().unwrap_or(MISSING),
    )
}

/// Render a whole listing, one article per line.
pub fn render(articles: &[Article]) -> String {
    if articles.is_empty() {
        return "No news found.\n".to_string();
    }
    let mut out = String::new();
    for article in articles {
        out.push_str(&article_line(article));
        out.push('\n');
    }
    out
}
