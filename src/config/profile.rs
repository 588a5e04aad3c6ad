//! Profile data (profile.yml)
//!
//! Everything the home page shows besides blog posts: hero, experience
//! timeline, project gallery, skills badges, external article links and
//! social links. All of it is static data authored out of band.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The whole profile, one section per home-page block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub hero: Hero,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub articles: Vec<Article>,
    pub social: SocialLinks,
}

/// Hero section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub avatar: Option<String>,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            headline: "Software Engineer".to_string(),
            tagline: String::new(),
            avatar: None,
        }
    }
}

/// One entry in the experience timeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub highlights: Vec<String>,
}

/// One project card
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub url: Option<String>,
    pub repo: Option<String>,
    pub image: Option<String>,
}

/// One skill badge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub level: String,
    pub icon: String,
    pub category: String,
}

/// An externally published article link
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub source: String,
    pub date: Option<String>,
}

/// Social links shown in the footer and floating bar
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub medium: Option<String>,
    pub email: Option<String>,
}

impl Profile {
    /// Load profile data from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let profile: Profile = serde_yaml::from_str(&content)?;
        Ok(profile)
    }
}
