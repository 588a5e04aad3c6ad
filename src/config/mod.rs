//! Configuration module

mod profile;
mod site;

pub use profile::{
    Article, Experience, Hero, Profile, Project, Skill, SocialLinks,
};
pub use site::SiteConfig;
