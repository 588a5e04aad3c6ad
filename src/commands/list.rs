//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let reader = site.post_reader();

    match content_type {
        "post" | "posts" => {
            let posts = reader.list_posts();
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}] ({})",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.slug,
                    post.read_time
                );
            }
        }
        "category" | "categories" => {
            let mut categories: HashMap<String, usize> = HashMap::new();
            for post in reader.list_posts() {
                *categories.entry(post.category).or_insert(0) += 1;
            }
            println!("Categories ({}):", categories.len());
            let mut categories: Vec<_> = categories.into_iter().collect();
            categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (category, count) in categories {
                println!("  {} ({})", category, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, category", content_type);
        }
    }

    Ok(())
}
