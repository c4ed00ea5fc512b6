//! Content module - front-matter files loaded into typed records

mod fields;
mod frontmatter;
mod leader;
pub mod loader;
mod outreach;
mod post;
mod slug;
mod sponsor;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub use fields::{ClosedSet, Fields};
pub use frontmatter::FrontMatter;
pub use leader::{load_leaders, Leader};
pub use loader::{load_collection, Document, Record};
pub use outreach::{load_outreach_events, OutreachEvent, DEFAULT_CATEGORY};
pub use post::{
    find_post, load_post, load_posts, sort_newest_first, BlogCategory, BlogPost,
};
pub use slug::{disambiguate, slugify_title};
pub use sponsor::{group_by_tier, load_sponsors, Sponsor, SponsorTier};

/// The content collections of the site, one directory each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Blog,
    Leaders,
    Outreach,
    Sponsors,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Blog,
        ContentKind::Leaders,
        ContentKind::Outreach,
        ContentKind::Sponsors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Blog => "blog",
            ContentKind::Leaders => "leaders",
            ContentKind::Outreach => "outreach",
            ContentKind::Sponsors => "sponsors",
        }
    }

    /// Front-matter fields written by `new` for this kind
    pub fn scaffold_fields(&self) -> &'static [&'static str] {
        match self {
            ContentKind::Blog => &[
                "title",
                "date",
                "author",
                "category",
                "description",
                "image",
                "tags",
            ],
            ContentKind::Leaders => &["name", "role", "description", "image", "linkedin", "github"],
            ContentKind::Outreach => &["title", "description", "image", "category"],
            ContentKind::Sponsors => &["name", "logo", "description", "tier", "website"],
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blog" | "post" | "posts" => Ok(ContentKind::Blog),
            "leader" | "leaders" => Ok(ContentKind::Leaders),
            "outreach" | "event" | "events" => Ok(ContentKind::Outreach),
            "sponsor" | "sponsors" => Ok(ContentKind::Sponsors),
            other => Err(format!(
                "unknown content kind: {}. Available: blog, leaders, outreach, sponsors",
                other
            )),
        }
    }
}
