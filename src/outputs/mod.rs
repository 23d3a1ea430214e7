//! Output of a loaded listing.
//!
//! - [`json`]: writes the articles to a JSON file
//! - [`text`]: renders one line per article for the terminal

pub mod json;
pub mod text;
