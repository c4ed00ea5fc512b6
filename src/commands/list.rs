//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::content::ContentKind;
use crate::Site;

/// List one collection, as text or JSON
pub fn run(site: &Site, kind: ContentKind, json: bool) -> Result<()> {
    let output = if json {
        render_json(site, kind)?
    } else {
        render_text(site, kind)?
    };
    println!("{}", output);
    Ok(())
}

pub fn render_json(site: &Site, kind: ContentKind) -> Result<String> {
    let value = match kind {
        ContentKind::Blog => serde_json::to_string_pretty(&site.posts()?)?,
        ContentKind::Leaders => serde_json::to_string_pretty(&site.leaders()?)?,
        ContentKind::Outreach => serde_json::to_string_pretty(&site.outreach_events()?)?,
        ContentKind::Sponsors => serde_json::to_string_pretty(&site.sponsors()?)?,
    };
    Ok(value)
}

pub fn render_text(site: &Site, kind: ContentKind) -> Result<String> {
    let mut out = String::new();

    match kind {
        ContentKind::Blog => {
            let posts = site.posts()?;
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {} /{} [{}]",
                    post.date, post.title, post.slug, post.category
                )?;
            }
        }
        ContentKind::Leaders => {
            let leaders = site.leaders()?;
            writeln!(out, "Leaders ({}):", leaders.len())?;
            for leader in leaders {
                writeln!(out, "  {} - {} [{}]", leader.name, leader.role, leader.key)?;
            }
        }
        ContentKind::Outreach => {
            let events = site.outreach_events()?;
            writeln!(out, "Outreach events ({}):", events.len())?;
            for event in events {
                writeln!(out, "  {} ({}) [{}]", event.title, event.category, event.key)?;
            }
        }
        ContentKind::Sponsors => {
            let sponsors = site.sponsors()?;
            writeln!(out, "Sponsors ({}):", sponsors.len())?;
            for (tier, members) in crate::content::group_by_tier(&sponsors) {
                writeln!(out, "  {}:", tier)?;
                for sponsor in members {
                    writeln!(out, "    {} [{}]", sponsor.name, sponsor.key)?;
                }
            }
        }
    }

    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site_with_sponsors() -> (TempDir, Site) {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let dir = site.collection_dir(ContentKind::Sponsors);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("acme.md"),
            "---\nname: Acme\nlogo: public/acme.png\ndescription: D\ntier: Gold\n---\n",
        )
        .unwrap();
        (tmp, site)
    }

    #[test]
    fn test_render_text_groups_sponsors() {
        let (_tmp, site) = site_with_sponsors();
        let text = render_text(&site, ContentKind::Sponsors).unwrap();
        assert!(text.starts_with("Sponsors (1):"));
        assert!(text.contains("  Gold:"));
        assert!(text.contains("    Acme"));
    }

    #[test]
    fn test_render_json() {
        let (_tmp, site) = site_with_sponsors();
        let json = render_json(&site, ContentKind::Sponsors).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["logo"], "acme.png");
        assert_eq!(value[0]["tier"], "Gold");
    }

    #[test]
    fn test_render_empty_blog() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(render_text(&site, ContentKind::Blog).unwrap(), "Posts (0):");
        assert_eq!(render_json(&site, ContentKind::Blog).unwrap(), "[]");
    }
}
