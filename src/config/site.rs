//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,

    // Directories, relative to the site base directory
    pub content_dir: String,
    pub public_dir: String,
    pub static_dir: String,

    // Blog
    pub blog_title: String,
    pub blog_description: String,

    // Code highlighting theme (syntect theme name)
    pub highlight_theme: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),

            content_dir: "content/blog".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            blog_title: "Blog".to_string(),
            blog_description: String::new(),

            highlight_theme: "base16-ocean.dark".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Portfolio");
        assert_eq!(config.content_dir, "content/blog");
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Corner of the Internet
author: Test User
url: https://example.org
blog_title: Writing
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Corner of the Internet");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.blog_title, "Writing");
        // Unset keys keep their defaults
        assert_eq!(config.content_dir, "content/blog");
    }
}
