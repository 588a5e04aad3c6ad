//! Built-in site templates using the Tera template engine
//!
//! All templates are embedded directly in the binary; there is no theme
//! directory to resolve at runtime.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::content::Post;
use crate::helpers;

/// Embedded stylesheet, written to `style.css` in the output directory
pub const STYLESHEET: &str = include_str!("site/style.css");

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // We generate HTML and pre-rendered fragments; escaping happens
        // at render time where needed, not globally
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("home.html", include_str!("site/home.html")),
            ("blog.html", include_str!("site/blog.html")),
            ("post.html", include_str!("site/post.html")),
            ("not_found.html", include_str!("site/not_found.html")),
        ])?;

        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 160,
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!("{}…", truncated.trim_end())))
    }
}

/// Data structures for template context

/// Post fields as the templates see them
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub image: Option<String>,
    pub category: String,
    pub read_time: String,
    /// Site-relative path to the post page
    pub path: String,
    /// ISO-8601, for `<time datetime>` and meta tags
    pub date: String,
    /// Short display date for listings
    pub date_display: String,
    /// Full display date for the post header
    pub date_full: String,
    /// Rendered HTML body; empty in listing context
    pub content: String,
}

impl PostView {
    /// Build the template view of a post. `content` is the rendered HTML
    /// body, or empty when only listing fields are needed.
    pub fn new(post: &Post, content: String) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            description: post.description.clone(),
            author: post.author.clone(),
            image: post.image.clone(),
            category: post.category.clone(),
            read_time: post.read_time.clone(),
            path: format!("/blog/{}/", post.slug),
            date: helpers::iso_date(&post.date),
            date_display: helpers::short_date(&post.date),
            date_full: helpers::full_date(&post.date),
            content,
        }
    }
}

/// Site-wide fields available to every template
#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,
    pub blog_title: String,
    pub blog_description: String,
}
