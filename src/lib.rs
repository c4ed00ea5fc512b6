//! mortorq-site: content loader and authoring tools for the Team 1515 MorTorq website
//!
//! Blog posts, leader bios, outreach events and sponsors are kept as
//! markdown files with YAML front-matter, one directory per kind. This crate
//! loads them into validated, render-ready records and provides the
//! commands used while authoring the site.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{BlogPost, ContentKind, Leader, OutreachEvent, Sponsor};
pub use error::ContentError;

/// The site being authored
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding one sub-directory per content kind
    pub content_dir: PathBuf,
    /// Directory served at the site root
    pub public_dir: PathBuf,
}

impl Site {
    /// Open a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join("_config.yml")
    }

    /// Directory of one content collection
    pub fn collection_dir(&self, kind: ContentKind) -> PathBuf {
        self.content_dir.join(self.config.collection_dir(kind))
    }

    pub fn posts(&self) -> error::Result<Vec<BlogPost>> {
        content::load_posts(&self.collection_dir(ContentKind::Blog))
    }

    /// Look up a single post by slug
    pub fn post(&self, slug: &str) -> error::Result<BlogPost> {
        content::load_post(&self.collection_dir(ContentKind::Blog), slug)
    }

    pub fn leaders(&self) -> error::Result<Vec<Leader>> {
        content::load_leaders(&self.collection_dir(ContentKind::Leaders))
    }

    pub fn outreach_events(&self) -> error::Result<Vec<OutreachEvent>> {
        content::load_outreach_events(&self.collection_dir(ContentKind::Outreach))
    }

    pub fn sponsors(&self) -> error::Result<Vec<Sponsor>> {
        content::load_sponsors(&self.collection_dir(ContentKind::Sponsors))
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::init_site(&self.base_dir)
    }

    /// Validate every collection
    pub fn check(&self) -> Result<commands::check::Summary> {
        commands::check::run(self)
    }

    /// Write `sitemap.xml` into the public directory
    pub fn sitemap(&self) -> Result<PathBuf> {
        commands::sitemap::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_site_directories() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "content_dir: content\nblog_dir: posts\n",
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.content_dir, tmp.path().join("content"));
        assert_eq!(
            site.collection_dir(ContentKind::Blog),
            tmp.path().join("content/posts")
        );
        assert_eq!(site.public_dir, tmp.path().join("public"));
    }

    #[test]
    fn test_empty_site_loads_empty_collections() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert!(site.posts().unwrap().is_empty());
        assert!(site.leaders().unwrap().is_empty());
        assert!(site.outreach_events().unwrap().is_empty());
        assert!(site.sponsors().unwrap().is_empty());
        assert!(site.post("anything").unwrap_err().is_not_found());
    }
}
