//! Generate sitemap.xml

use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};
use std::fs;
use std::path::PathBuf;

use crate::content::BlogPost;
use crate::helpers::{date_xml, full_url_for};
use crate::Site;

/// Write `sitemap.xml` into the public directory and return its path
pub fn run(site: &Site) -> Result<PathBuf> {
    let posts = if site.config.sitemap.include_posts {
        site.posts()?
    } else {
        Vec::new()
    };

    let xml = render(site, &posts, &Local::now());

    fs::create_dir_all(&site.public_dir)?;
    let path = site.public_dir.join("sitemap.xml");
    fs::write(&path, xml)?;

    tracing::info!("Wrote sitemap with {} posts to {:?}", posts.len(), path);
    Ok(path)
}

/// Render the sitemap for the configured routes and the given posts
pub fn render<Tz: TimeZone>(site: &Site, posts: &[BlogPost], now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let sitemap = &site.config.sitemap;
    let generated = date_xml(now);
    let mut entries = Vec::new();

    for route in &sitemap.routes {
        let priority = if route == "/" { "1.0" } else { "0.8" };
        entries.push(url_entry(
            &full_url_for(&site.config, route),
            &generated,
            &sitemap.changefreq,
            priority,
        ));
    }

    for post in posts {
        let route = format!("{}/{}", sitemap.blog_route.trim_end_matches('/'), post.slug);
        let lastmod = post
            .published_on()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| generated.clone());
        entries.push(url_entry(
            &full_url_for(&site.config, &route),
            &lastmod,
            &sitemap.changefreq,
            "0.8",
        ));
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}</urlset>\n",
        entries.concat()
    )
}

fn url_entry(loc: &str, lastmod: &str, changefreq: &str, priority: &str) -> String {
    format!(
        "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
        escape_xml(loc),
        lastmod,
        escape_xml(changefreq),
        priority
    )
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
