//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::ContentKind;

const DEFAULT_CONFIG: &str = r#"# Site
title: Team 1515 MorTorq
description: ''

# URL
url: https://team1515.com
root: /

# Directory
content_dir: _data
public_dir: public
blog_dir: blog
leaders_dir: leaders
outreach_dir: outreach
sponsors_dir: sponsors

# Sitemap
sitemap:
  routes:
    - /
    - /about
    - /outreach
    - /leaders
    - /sponsors
    - /contact
    - /blog
  changefreq: weekly
  blog_route: /blog
  include_posts: true
"#;

/// Initialize a new site in the given directory.
///
/// Existing files are left untouched.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)?;
        tracing::debug!("Created {:?}", config_path);
    }

    let config = SiteConfig::load(&config_path)?;
    let content_dir = target_dir.join(&config.content_dir);
    for kind in ContentKind::ALL {
        fs::create_dir_all(content_dir.join(config.collection_dir(kind)))?;
    }
    fs::create_dir_all(target_dir.join(&config.public_dir))?;

    Ok(())
}
