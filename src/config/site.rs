//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::ContentKind;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub blog_dir: String,
    pub leaders_dir: String,
    pub outreach_dir: String,
    pub sponsors_dir: String,

    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Team 1515 MorTorq".to_string(),
            description: String::new(),

            url: "https://team1515.com".to_string(),
            root: "/".to_string(),

            content_dir: "_data".to_string(),
            public_dir: "public".to_string(),
            blog_dir: "blog".to_string(),
            leaders_dir: "leaders".to_string(),
            outreach_dir: "outreach".to_string(),
            sponsors_dir: "sponsors".to_string(),

            sitemap: SitemapConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        // A file holding only comments deserializes to null
        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_value(value)?;
        Ok(config)
    }

    /// Directory name of a collection, relative to `content_dir`
    pub fn collection_dir(&self, kind: ContentKind) -> &str {
        match kind {
            ContentKind::Blog => &self.blog_dir,
            ContentKind::Leaders => &self.leaders_dir,
            ContentKind::Outreach => &self.outreach_dir,
            ContentKind::Sponsors => &self.sponsors_dir,
        }
    }
}

/// Sitemap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Static page routes
    pub routes: Vec<String>,
    pub changefreq: String,
    /// Route under which blog posts are addressed by slug
    pub blog_route: String,
    pub include_posts: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            routes: [
                "/", "/about", "/outreach", "/leaders", "/sponsors", "/contact", "/blog",
            ]
            .iter()
            .map(|r| r.to_string())
            .collect(),
            changefreq: "weekly".to_string(),
            blog_route: "/blog".to_string(),
            include_posts: true,
        }
    }
}
