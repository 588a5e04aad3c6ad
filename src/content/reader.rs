//! Post reader - assembles the post collection and resolves single posts

use thiserror::Error;

use super::{ContentStore, FrontMatter, Post, StoreError};

/// Error resolving a single post
#[derive(Debug, Error)]
pub enum PostError {
    /// No content file backs the slug, or its content could not be read.
    /// Malformed content is presented identically to missing content;
    /// the caller only needs a render-or-404 decision.
    #[error("no post with slug `{0}`")]
    NotFound(String),
}

/// Reads posts from a content store.
///
/// Listing and single-post resolution run the same store -> front-matter
/// -> projection pipeline, so the detail view of a post is field-for-field
/// identical to its listing entry.
#[derive(Debug, Clone)]
pub struct PostReader {
    store: ContentStore,
    default_author: String,
}

impl PostReader {
    pub fn new(store: ContentStore, default_author: impl Into<String>) -> Self {
        Self {
            store,
            default_author: default_author.into(),
        }
    }

    /// List all posts, newest first.
    ///
    /// Never fails: an absent directory is the valid "no posts yet" state,
    /// a store I/O error degrades to an empty collection with a warning,
    /// and a single unreadable file is skipped rather than aborting the
    /// whole listing.
    pub fn list_posts(&self) -> Vec<Post> {
        let ids = match self.store.list_ids() {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("Failed to list content in {:?}: {}", self.store.dir(), e);
                return Vec::new();
            }
        };

        let mut posts: Vec<Post> = Vec::with_capacity(ids.len());
        for id in ids {
            match self.load(&id) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Skipping post `{}`: {}", id, e);
                }
            }
        }

        // Newest first; slug ties keep the output deterministic
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        posts
    }

    /// Resolve a single post by slug.
    pub fn get_post(&self, slug: &str) -> Result<Post, PostError> {
        self.load(slug).map_err(|e| {
            if !matches!(e, StoreError::NotFound(_)) {
                tracing::warn!("Failed to read post `{}`: {}", slug, e);
            }
            PostError::NotFound(slug.to_string())
        })
    }

    fn load(&self, slug: &str) -> Result<Post, StoreError> {
        let text = self.store.read(slug)?;
        let (fm, body) = FrontMatter::parse(&text);
        Ok(Post::project(slug, fm, body, &self.default_author))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn reader(dir: &Path) -> PostReader {
        PostReader::new(ContentStore::new(dir), "Jane Doe")
    }

    fn write_post(dir: &Path, slug: &str, date: &str, title: &str) {
        let content = format!("---\ntitle: {}\ndate: {}\n---\nBody of {}.", title, date, slug);
        fs::write(dir.join(format!("{}.mdx", slug)), content).unwrap();
    }

    #[test]
    fn test_list_posts_missing_directory_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let posts = reader(&tmp.path().join("nope")).list_posts();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_list_posts_sorted_by_date_descending() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "oldest", "2023-12-31", "Oldest");
        write_post(tmp.path(), "newest", "2024-06-15", "Newest");
        write_post(tmp.path(), "middle", "2024-01-01", "Middle");

        let posts = reader(tmp.path()).list_posts();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_list_posts_equal_dates_tie_break_on_slug() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "zebra", "2024-03-01", "Z");
        write_post(tmp.path(), "apple", "2024-03-01", "A");

        let posts = reader(tmp.path()).list_posts();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["apple", "zebra"]);
    }

    #[test]
    fn test_list_posts_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "one", "2024-01-01", "One");
        write_post(tmp.path(), "two", "2024-02-01", "Two");

        let r = reader(tmp.path());
        let first: Vec<_> = r.list_posts().iter().map(|p| p.slug.clone()).collect();
        let second: Vec<_> = r.list_posts().iter().map(|p| p.slug.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dateless_post_sorts_newest() {
        // The documented ordering hazard: a missing date defaults to now,
        // which outranks every dated post.
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "dated", "2024-06-15", "Dated");
        fs::write(tmp.path().join("dateless.mdx"), "---\ntitle: Dateless\n---\nBody").unwrap();

        let posts = reader(tmp.path()).list_posts();
        assert_eq!(posts[0].slug, "dateless");
    }

    #[test]
    fn test_get_post_matches_listing_entry() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "my-post", "2024-01-15", "My Post");

        let r = reader(tmp.path());
        let listed = r.list_posts().into_iter().next().unwrap();
        let fetched = r.get_post("my-post").unwrap();

        assert_eq!(fetched.slug, listed.slug);
        assert_eq!(fetched.title, listed.title);
        assert_eq!(fetched.description, listed.description);
        assert_eq!(fetched.date, listed.date);
        assert_eq!(fetched.author, listed.author);
        assert_eq!(fetched.category, listed.category);
        assert_eq!(fetched.read_time, listed.read_time);
        assert_eq!(fetched.body, listed.body);
    }

    #[test]
    fn test_get_post_missing_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let err = reader(tmp.path()).get_post("does-not-exist").unwrap_err();
        assert!(matches!(err, PostError::NotFound(slug) if slug == "does-not-exist"));
    }

    #[test]
    fn test_get_post_malformed_header_still_renders() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("broken.mdx"),
            "---\ntitle: [oops\n---\nStill readable body.",
        )
        .unwrap();

        let post = reader(tmp.path()).get_post("broken").unwrap();
        assert_eq!(post.title, "Untitled");
        assert_eq!(post.category, "General");
        assert!(post.body.contains("Still readable body."));
    }

    #[test]
    fn test_bad_file_does_not_break_listing() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "good", "2024-01-01", "Good");
        // Invalid UTF-8 cannot be read as text; the listing must survive it
        fs::write(tmp.path().join("binary.mdx"), [0xff, 0xfe, 0x00, 0x01]).unwrap();

        let posts = reader(tmp.path()).list_posts();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["good"]);
    }
}
