//! Front-matter parsing
//!
//! Splits a raw content file into a key-value metadata header and the
//! remaining markup body. This module knows nothing about Post defaults;
//! it is a generic header/body splitter.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Front-matter metadata from a content file.
///
/// Every field is optional; [`Post::project`](crate::content::Post::project)
/// applies the defaults. Unrecognized keys are preserved in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split content into front-matter and body.
    ///
    /// A header is a `---` delimited YAML block at the start of the text.
    /// With no header, the metadata is empty and the body is the input
    /// unchanged. A malformed header fails soft: this is presentation
    /// content, so we log a warning and keep the whole text as body
    /// rather than dropping anything.
    pub fn parse(content: &str) -> (Self, &str) {
        let trimmed = content.trim_start();
        if !trimmed.starts_with("---") {
            return (FrontMatter::default(), content);
        }

        let rest = &trimmed[3..];
        let Some(end_pos) = rest.find("\n---") else {
            // No closing delimiter, treat as no front-matter
            return (FrontMatter::default(), content);
        };

        let header = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if header.trim().is_empty() {
            return (FrontMatter::default(), body);
        }

        match serde_yaml::from_str::<FrontMatter>(header) {
            Ok(fm) => (fm, body),
            Err(e) => {
                tracing::warn!("Malformed front-matter header, using defaults: {}", e);
                (FrontMatter::default(), content)
            }
        }
    }

    /// Parse the date field into a DateTime
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_ref().and_then(|s| parse_date_string(s))
    }
}

/// Parse a date string in ISO-8601 and a few common relaxed formats
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    // Full RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return dt.and_local_timezone(Local).single();
        }
    }

    // Date only
    if let Ok(d) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0)?.and_local_timezone(Local).single();
    }

    tracing::warn!("Unparseable date in front-matter: {:?}", s);
    None
}
