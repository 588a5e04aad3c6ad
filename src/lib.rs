//! folio: a personal portfolio and blog site generator
//!
//! The profile page (hero, experience, projects, skills, articles) comes
//! from `profile.yml`; blog posts come from markdown files with optional
//! front-matter under the content directory. `folio generate` renders the
//! whole site into the public directory, `folio server` previews it.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentStore, PostReader};

/// The main site instance
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Profile data for the home page
    pub profile: config::Profile,
    /// Base directory
    pub base_dir: PathBuf,
    /// Blog content directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Static assets directory
    pub static_dir: PathBuf,
}

impl Site {
    /// Create a new site instance from a directory.
    ///
    /// Both `site.yml` and `profile.yml` are optional; a bare directory
    /// with only content files still builds with defaults.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        let config_path = base_dir.join("site.yml");
        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let profile_path = base_dir.join("profile.yml");
        let profile = if profile_path.exists() {
            config::Profile::load(&profile_path)?
        } else {
            config::Profile::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            profile,
            base_dir,
            content_dir,
            public_dir,
            static_dir,
        })
    }

    /// Post reader over this site's content directory
    pub fn post_reader(&self) -> PostReader {
        PostReader::new(
            ContentStore::new(&self.content_dir),
            self.config.author.clone(),
        )
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_site_from_bare_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.config.author, "John Doe");
        assert_eq!(site.content_dir, tmp.path().join("content/blog"));
        assert_eq!(site.public_dir, tmp.path().join("public"));
    }

    #[test]
    fn test_site_reads_config_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("site.yml"),
            "author: Ada Example\ncontent_dir: posts\n",
        )
        .unwrap();
        fs::write(tmp.path().join("profile.yml"), "hero:\n  name: Ada Example\n").unwrap();

        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.config.author, "Ada Example");
        assert_eq!(site.content_dir, tmp.path().join("posts"));
        assert_eq!(site.profile.hero.name, "Ada Example");
    }
}
