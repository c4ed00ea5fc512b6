//! Create a new content file

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::{BlogCategory, ClosedSet, ContentKind, SponsorTier};
use crate::Site;

/// Write a scaffolded content file for `kind`, returning its path
pub fn create_entry(site: &Site, kind: ContentKind, title: &str) -> Result<PathBuf> {
    let target_dir = site.collection_dir(kind);
    fs::create_dir_all(&target_dir)?;

    let stem = slug::slugify(title);
    if stem.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let file_path = target_dir.join(format!("{}.md", stem));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, scaffold(kind, title))?;
    tracing::info!("Created {} entry {:?}", kind, file_path);

    Ok(file_path)
}

/// Front-matter template for a new entry
fn scaffold(kind: ContentKind, title: &str) -> String {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let mut out = String::from("---\n");

    for field in kind.scaffold_fields() {
        let value = match (kind, *field) {
            (_, "title") | (_, "name") => quote(title),
            (ContentKind::Blog, "date") => quote(&today),
            (ContentKind::Blog, "category") => quote(BlogCategory::TeamNews.as_str()),
            (ContentKind::Blog, "tags") => "[]".to_string(),
            (ContentKind::Sponsors, "tier") => SponsorTier::Bronze.as_str().to_string(),
            (ContentKind::Outreach, "category") => crate::content::DEFAULT_CATEGORY.to_string(),
            (_, "image") | (_, "logo") => quote("public/media/"),
            (_, "linkedin") | (_, "github") | (_, "website") => String::new(),
            _ => quote(""),
        };

        if value.is_empty() {
            out.push_str(&format!("{}:\n", field));
        } else {
            out.push_str(&format!("{}: {}\n", field, value));
        }
    }

    out.push_str("---\n");
    if kind == ContentKind::Blog {
        out.push_str(&format!("\n# {}\n", title));
    }
    out
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
