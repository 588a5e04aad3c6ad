//! Post model and projection

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::FrontMatter;

/// Title used when the front-matter has none
pub const DEFAULT_TITLE: &str = "Untitled";

/// Category used when the front-matter has none
pub const DEFAULT_CATEGORY: &str = "General";

/// Assumed reading speed, words per minute
const WORDS_PER_MINUTE: usize = 200;

/// A blog post, projected from a content file.
///
/// Posts are view projections: built fresh on every read, never cached
/// and never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, the content filename minus its extension
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short summary shown in listings and link previews
    pub description: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Post author
    pub author: String,

    /// Optional header image URL or path
    pub image: Option<String>,

    /// Post category
    pub category: String,

    /// Derived reading-time estimate, e.g. "3 min read"
    pub read_time: String,

    /// Raw markdown body (front-matter header stripped)
    pub body: String,
}

impl Post {
    /// Project a parsed document into a Post.
    ///
    /// Pure and total: entirely empty metadata still yields a fully
    /// defaulted, valid Post. A missing date defaults to the current
    /// instant, which makes the post sort as newest; that hazard is
    /// accepted so that building a Post can never fail.
    pub fn project(slug: &str, fm: FrontMatter, body: &str, default_author: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: fm.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: fm.description.clone().unwrap_or_default(),
            date: fm.parse_date().unwrap_or_else(Local::now),
            author: fm
                .author
                .clone()
                .unwrap_or_else(|| default_author.to_string()),
            image: fm.image.clone(),
            category: fm
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            // Always computed; a readTime key in the metadata is never trusted
            read_time: estimate_read_time(body),
            body: body.to_string(),
        }
    }
}

/// Estimate reading time from body word count at 200 words per minute.
///
/// An empty body still reads "1 min read": the estimate is floored at
/// one minute, a fixed convention rather than a runtime accident.
pub fn estimate_read_time(body: &str) -> String {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}
