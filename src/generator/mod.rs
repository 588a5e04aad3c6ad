//! Generator module - renders the site into static HTML files

mod meta;

pub use meta::PageMeta;

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tera::Context;
use walkdir::WalkDir;

use crate::content::{MarkdownRenderer, Post};
use crate::templates::{ConfigData, PostView, TemplateRenderer, STYLESHEET};
use crate::Site;

/// Static site generator using the embedded Tera templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl Generator {
    pub fn new(site: &Site) -> Result<Self> {
        Ok(Self {
            site: site.clone(),
            renderer: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::with_theme(&site.config.highlight_theme),
        })
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        fs::write(self.site.public_dir.join("style.css"), STYLESHEET)?;
        self.copy_static_assets()?;

        let posts = self.site.post_reader().list_posts();
        tracing::info!("Loaded {} posts", posts.len());

        let listing: Vec<PostView> = posts
            .iter()
            .map(|p| PostView::new(p, String::new()))
            .collect();

        self.generate_home(&listing)?;
        self.generate_blog_index(&listing)?;
        for post in &posts {
            self.generate_post_page(post)?;
        }
        self.generate_not_found()?;

        Ok(())
    }

    /// Base context shared by every page
    fn base_context(&self, page: &PageMeta) -> Context {
        let config = ConfigData {
            title: self.site.config.title.clone(),
            description: self.site.config.description.clone(),
            author: self.site.config.author.clone(),
            language: self.site.config.language.clone(),
            url: self.site.config.url.clone(),
            blog_title: self.site.config.blog_title.clone(),
            blog_description: self.site.config.blog_description.clone(),
        };

        let mut context = Context::new();
        context.insert("config", &config);
        context.insert("profile", &self.site.profile);
        context.insert("page", page);
        context
    }

    fn generate_home(&self, listing: &[PostView]) -> Result<()> {
        let page = PageMeta::home(&self.site.config);
        let mut context = self.base_context(&page);
        // The home page teases the three most recent posts
        context.insert("recent_posts", &listing[..listing.len().min(3)]);

        let html = self.renderer.render("home.html", &context)?;
        self.write_page(Path::new("index.html"), &html)
    }

    fn generate_blog_index(&self, listing: &[PostView]) -> Result<()> {
        let page = PageMeta::blog_index(&self.site.config);
        let mut context = self.base_context(&page);
        context.insert("posts", listing);

        let html = self.renderer.render("blog.html", &context)?;
        self.write_page(Path::new("blog/index.html"), &html)
    }

    fn generate_post_page(&self, post: &Post) -> Result<()> {
        let content = self
            .markdown
            .render(&post.body)
            .with_context(|| format!("rendering post `{}`", post.slug))?;
        let view = PostView::new(post, content);

        let page = PageMeta::post(&self.site.config, post);
        let mut context = self.base_context(&page);
        context.insert("post", &view);

        let html = self.renderer.render("post.html", &context)?;
        self.write_page(&Path::new("blog").join(&post.slug).join("index.html"), &html)
    }

    fn generate_not_found(&self) -> Result<()> {
        let page = PageMeta::not_found(&self.site.config);
        let context = self.base_context(&page);

        let html = self.renderer.render("not_found.html", &context)?;
        self.write_page(Path::new("404.html"), &html)
    }

    fn write_page(&self, relative: &Path, html: &str) -> Result<()> {
        let path = self.site.public_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, html).with_context(|| format!("writing {:?}", path))?;
        tracing::debug!("Wrote {:?}", path);
        Ok(())
    }

    /// Copy everything under the static directory into the output tree
    fn copy_static_assets(&self) -> Result<()> {
        if !self.site.static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(&self.site.static_dir)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(&self.site.static_dir)?;
            let target = self.site.public_dir.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &target)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_with_posts() -> (tempfile::TempDir, Site) {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("site.yml"),
            "title: Test Site\nauthor: Ada Example\nurl: https://example.org\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("profile.yml"),
            "hero:\n  name: Ada Example\n  headline: Engineer\n",
        )
        .unwrap();

        let content_dir = tmp.path().join("content/blog");
        fs::create_dir_all(&content_dir).unwrap();
        fs::write(
            content_dir.join("first-post.mdx"),
            "---\ntitle: First Post\ndate: 2024-01-15\ncategory: Notes\n---\n# Heading\n\nSome text.",
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        (tmp, site)
    }

    #[test]
    fn test_generate_writes_expected_tree() {
        let (tmp, site) = site_with_posts();
        Generator::new(&site).unwrap().generate().unwrap();

        let public = tmp.path().join("public");
        assert!(public.join("index.html").is_file());
        assert!(public.join("style.css").is_file());
        assert!(public.join("blog/index.html").is_file());
        assert!(public.join("blog/first-post/index.html").is_file());
        assert!(public.join("404.html").is_file());
    }

    #[test]
    fn test_post_page_contains_rendered_body_and_meta() {
        let (tmp, site) = site_with_posts();
        Generator::new(&site).unwrap().generate().unwrap();

        let html =
            fs::read_to_string(tmp.path().join("public/blog/first-post/index.html")).unwrap();
        assert!(html.contains("<h1>Heading</h1>"));
        assert!(html.contains("First Post | Test Site"));
        assert!(html.contains(r#"property="og:type" content="article""#));
        assert!(html.contains("BlogPosting"));
        assert!(html.contains("1 min read"));
    }

    #[test]
    fn test_blog_index_lists_posts_and_home_teases_them() {
        let (tmp, site) = site_with_posts();
        Generator::new(&site).unwrap().generate().unwrap();

        let index = fs::read_to_string(tmp.path().join("public/blog/index.html")).unwrap();
        assert!(index.contains("/blog/first-post/"));
        assert!(index.contains("Jan 15, 2024"));

        let home = fs::read_to_string(tmp.path().join("public/index.html")).unwrap();
        assert!(home.contains("Ada Example"));
        assert!(home.contains("/blog/first-post/"));
    }

    #[test]
    fn test_generate_without_content_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        Generator::new(&site).unwrap().generate().unwrap();

        let index = fs::read_to_string(tmp.path().join("public/blog/index.html")).unwrap();
        assert!(index.contains("No posts yet"));
    }

    #[test]
    fn test_static_assets_are_copied() {
        let (tmp, site) = site_with_posts();
        let static_dir = tmp.path().join("static/images");
        fs::create_dir_all(&static_dir).unwrap();
        fs::write(static_dir.join("me.png"), b"png").unwrap();

        Generator::new(&site).unwrap().generate().unwrap();
        assert!(tmp.path().join("public/images/me.png").is_file());
    }
}
