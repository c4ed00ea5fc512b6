//! Blog posts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::path::Path;

use super::loader::{load_collection, Document, Record};
use super::slug::{disambiguate, slugify_title};
use super::{ClosedSet, ContentKind};
use crate::error::{ContentError, Result};
use crate::helpers::{asset_path, parse_date};

/// Category of a blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlogCategory {
    #[serde(rename = "Competition Updates")]
    CompetitionUpdates,
    #[serde(rename = "Build Progress")]
    BuildProgress,
    #[serde(rename = "Team News")]
    TeamNews,
    #[serde(rename = "Technical Articles")]
    TechnicalArticles,
    #[serde(rename = "Community Events")]
    CommunityEvents,
}

impl ClosedSet for BlogCategory {
    const VARIANTS: &'static [Self] = &[
        BlogCategory::CompetitionUpdates,
        BlogCategory::BuildProgress,
        BlogCategory::TeamNews,
        BlogCategory::TechnicalArticles,
        BlogCategory::CommunityEvents,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            BlogCategory::CompetitionUpdates => "Competition Updates",
            BlogCategory::BuildProgress => "Build Progress",
            BlogCategory::TeamNews => "Team News",
            BlogCategory::TechnicalArticles => "Technical Articles",
            BlogCategory::CommunityEvents => "Community Events",
        }
    }
}

impl fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Post title
    pub title: String,

    /// Publication date as authored
    pub date: String,

    pub author: String,

    pub category: BlogCategory,

    /// Short summary shown on cards
    pub description: String,

    /// Raw markdown content
    pub content: String,

    /// Cover image, relative to the public root
    pub image: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Unique URL-safe identifier within the collection
    pub slug: String,

    /// Source file path
    pub key: String,

    /// Slug before disambiguation: explicit `slug` field, else the title
    #[serde(skip)]
    slug_source: String,
}

impl BlogPost {
    /// Parse the authored date
    pub fn published_on(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// The text the slug was derived from
    pub fn slug_source(&self) -> &str {
        &self.slug_source
    }
}

impl Record for BlogPost {
    const KIND: ContentKind = ContentKind::Blog;

    fn from_document(doc: Document) -> Result<Self> {
        let fields = doc.fields();

        let title = fields.required_str("title")?;
        let date = fields.required_str("date")?;
        let author = fields.required_str("author")?;
        let category = fields.required_enum::<BlogCategory>("category")?;
        let description = fields.required_str("description")?;
        let image = asset_path(&fields.required_str("image")?);
        let tags = fields.optional_str_list("tags")?;
        let explicit_slug = fields.optional_str("slug")?;

        let content = if doc.body.trim().is_empty() {
            fields.required_str("content")?
        } else {
            doc.body.clone()
        };

        let slug_source = explicit_slug.unwrap_or_else(|| title.clone());
        let slug = candidate_slug(&slug_source, &doc.path);

        Ok(Self {
            title,
            date,
            author,
            category,
            description,
            content,
            image,
            tags,
            slug,
            key: doc.key(),
            slug_source,
        })
    }

    fn finish(posts: &mut [Self]) {
        let candidates = posts.iter().map(|post| post.slug.clone());
        let slugs = disambiguate(candidates.collect::<Vec<_>>());
        for (post, slug) in posts.iter_mut().zip(slugs) {
            if post.slug != slug {
                tracing::debug!(
                    "Slug {:?} of {:?} already taken, using {:?}",
                    post.slug,
                    post.key,
                    slug
                );
            }
            post.slug = slug;
        }
    }
}

/// Slug candidate for a post, falling back to the file name when the
/// title has no usable characters
fn candidate_slug(source: &str, path: &Path) -> String {
    let slug = slugify_title(source);
    if !slug.is_empty() {
        return slug;
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(::slug::slugify)
        .unwrap_or_default();
    if stem.is_empty() {
        "post".to_string()
    } else {
        stem
    }
}

/// Load all blog posts from `dir`
pub fn load_posts(dir: &Path) -> Result<Vec<BlogPost>> {
    load_collection(dir)
}

/// Load the collection and find the post with `slug`
pub fn load_post(dir: &Path, slug: &str) -> Result<BlogPost> {
    find_post(load_posts(dir)?, slug)
}

/// Find a post by slug in an already loaded collection
pub fn find_post(posts: Vec<BlogPost>, slug: &str) -> Result<BlogPost> {
    posts
        .into_iter()
        .find(|post| post.slug == slug)
        .ok_or_else(|| ContentError::NotFound {
            kind: ContentKind::Blog,
            slug: slug.to_string(),
        })
}

/// Sort posts newest first; posts whose date does not parse go last
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by_key(|post| {
        let date = post.published_on();
        (date.is_none(), Reverse(date))
    });
}
