//! Decoding of a listing document into [`Article`] records.
//!
//! The expected shape is
//!
//! ```text
//! { "response": { "results": [ { "sectionName"?, "webPublicationDate"?,
//!                                "webTitle"?, "webUrl"? }, ... ] } }
//! ```
//!
//! The `response` and `results` wrappers are required. Each of the four leaf
//! keys is looked up independently and may be missing. Field contents are not
//! validated here.

use crate::error::{MSG_PARSE, ParseError, ParseErrorKind};
use crate::models::{Article, KEY_DATE, KEY_SECTION, KEY_TITLE, KEY_WEB_URL};
use crate::notify::Notifier;
use crate::utils::{looks_truncated, truncate_for_log};
use serde_json::{Map, Value};
use tracing::{debug, error, instrument};

const KEY_RESPONSE: &str = "response";
const KEY_RESULTS: &str = "results";

/// Decode `raw`, distinguishing a valid empty listing from a malformed one.
///
/// On failure the returned [`ParseError`] carries every article decoded
/// before the offending element, in source order.
pub fn try_parse(raw: &str) -> Result<Vec<Article>, ParseError> {
    let mut articles = Vec::new();

    let root: Value =
        serde_json::from_str(raw).map_err(|e| ParseError::new(e.into(), Vec::new()))?;
    let response = root
        .get(KEY_RESPONSE)
        .filter(|v| v.is_object())
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingKey(KEY_RESPONSE), Vec::new()))?;
    let results = response
        .get(KEY_RESULTS)
        .and_then(Value::as_array)
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingKey(KEY_RESULTS), Vec::new()))?;

    for (index, element) in results.iter().enumerate() {
        match article_from_value(element) {
            Ok(article) => articles.push(article),
            Err(reason) => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidElement { index, reason },
                    articles,
                ));
            }
        }
    }

    Ok(articles)
}

/// Decode `raw` the best-effort way.
///
/// - `None` or empty input means "no data" and yields `None`.
/// - A malformed document is logged, reported to `notifier`, and yields the
///   articles decoded before the failure (possibly none).
#[instrument(level = "info", skip_all, fields(bytes = raw.map_or(0, str::len)))]
pub fn parse(raw: Option<&str>, notifier: &dyn Notifier) -> Option<Vec<Article>> {
    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => {
            debug!("List of news is empty");
            return None;
        }
    };

    match try_parse(raw) {
        Ok(articles) => {
            debug!(count = articles.len(), "Parsed news listing");
            Some(articles)
        }
        Err(e) => {
            let truncated = matches!(&e.kind, ParseErrorKind::Syntax(inner) if looks_truncated(inner));
            error!(
                error = %e,
                truncated,
                partial = e.partial.len(),
                body_preview = %truncate_for_log(raw, 200),
                "Problem parsing the news JSON results"
            );
            notifier.notify(MSG_PARSE);
            Some(e.into_partial())
        }
    }
}

fn article_from_value(element: &Value) -> Result<Article, String> {
    let object = element
        .as_object()
        .ok_or_else(|| format!("expected an object, found {}", kind_of(element)))?;
    Ok(Article::new(
        field(object, KEY_SECTION),
        field(object, KEY_DATE),
        field(object, KEY_TITLE),
        field(object, KEY_WEB_URL),
    ))
}

/// Strings are taken as-is; any other non-null value keeps its JSON text.
///
/// A missing key and an explicit JSON `null` are both absent. This differs
/// from org.json's `JSONObject.getString`, which turns a present `null` into
/// the text `"null"`.
fn field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
