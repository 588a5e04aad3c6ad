//! Content module - the blog content pipeline
//!
//! Raw file text flows store -> front-matter split -> post projection.
//! The markdown renderer sits outside the pipeline; it only ever sees
//! the raw body a Post carries.

mod frontmatter;
mod markdown;
mod post;
mod reader;
mod store;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::{estimate_read_time, Post, DEFAULT_CATEGORY, DEFAULT_TITLE};
pub use reader::{PostError, PostReader};
pub use store::{ContentStore, StoreError};
