//! Per-page link-preview metadata
//!
//! Feeds the `<head>` of every generated page: standard meta tags,
//! Open Graph / Twitter card tags and JSON-LD structured data, all
//! read off the resolved Post or the site configuration.

use serde::Serialize;
use serde_json::json;

use crate::config::SiteConfig;
use crate::helpers;

/// Metadata block for one generated page
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub author: String,
    pub url: String,
    pub image: Option<String>,
    pub og_type: String,
    pub published_time: Option<String>,
    pub json_ld: Option<String>,
}

impl PageMeta {
    /// Metadata for the home page
    pub fn home(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            url: page_url(config, "/"),
            image: None,
            og_type: "website".to_string(),
            published_time: None,
            json_ld: None,
        }
    }

    /// Metadata for the blog index page
    pub fn blog_index(config: &SiteConfig) -> Self {
        Self {
            title: format!("{} | {}", config.blog_title, config.title),
            description: config.blog_description.clone(),
            author: config.author.clone(),
            url: page_url(config, "/blog/"),
            image: None,
            og_type: "website".to_string(),
            published_time: None,
            json_ld: None,
        }
    }

    /// Metadata for the not-found page
    pub fn not_found(config: &SiteConfig) -> Self {
        Self {
            title: format!("Post not found | {}", config.title),
            description: String::new(),
            author: config.author.clone(),
            url: page_url(config, "/404.html"),
            image: None,
            og_type: "website".to_string(),
            published_time: None,
            json_ld: None,
        }
    }

    /// Metadata for a post detail page, read off the resolved Post
    pub fn post(config: &SiteConfig, post: &crate::content::Post) -> Self {
        let url = page_url(config, &format!("/blog/{}/", post.slug));
        let published = helpers::iso_date(&post.date);

        let json_ld = json!({
            "@context": "https://schema.org",
            "@type": "BlogPosting",
            "headline": post.title,
            "description": post.description,
            "datePublished": published,
            "url": url,
            "image": post.image,
            "author": {
                "@type": "Person",
                "name": post.author,
            },
        });

        Self {
            title: format!("{} | {}", post.title, config.title),
            description: post.description.clone(),
            author: post.author.clone(),
            url,
            image: post.image.clone(),
            og_type: "article".to_string(),
            published_time: Some(published),
            json_ld: Some(json_ld.to_string()),
        }
    }

}

fn page_url(config: &SiteConfig, path: &str) -> String {
    format!("{}{}", config.url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FrontMatter, Post};

    fn config() -> SiteConfig {
        SiteConfig {
            title: "Site".into(),
            url: "https://example.com/".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_home_meta() {
        let meta = PageMeta::home(&config());
        assert_eq!(meta.url, "https://example.com/");
        assert_eq!(meta.og_type, "website");
        assert!(meta.json_ld.is_none());
    }

    #[test]
    fn test_post_meta_carries_post_fields() {
        let fm = FrontMatter {
            title: Some("A Post".into()),
            description: Some("About things".into()),
            date: Some("2024-01-15".into()),
            image: Some("/img/x.png".into()),
            ..Default::default()
        };
        let post = Post::project("a-post", fm, "body", "Jane Doe");
        let meta = PageMeta::post(&config(), &post);

        assert_eq!(meta.title, "A Post | Site");
        assert_eq!(meta.url, "https://example.com/blog/a-post/");
        assert_eq!(meta.og_type, "article");
        assert_eq!(meta.image.as_deref(), Some("/img/x.png"));

        let json_ld: serde_json::Value =
            serde_json::from_str(meta.json_ld.as_deref().unwrap()).unwrap();
        assert_eq!(json_ld["@type"], "BlogPosting");
        assert_eq!(json_ld["headline"], "A Post");
        assert_eq!(json_ld["author"]["name"], "Jane Doe");
    }
}
