//! Outreach events

use serde::Serialize;
use std::path::Path;

use super::loader::{load_collection, Document, Record};
use super::ContentKind;
use crate::error::Result;
use crate::helpers::asset_path;

/// Category assigned to events that do not name one
pub const DEFAULT_CATEGORY: &str = "community";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachEvent {
    pub title: String,
    pub description: String,
    /// Image path as authored
    pub image: String,
    pub category: String,
    /// `image` relative to the public root
    pub image_url: String,
    pub key: String,
}

impl Record for OutreachEvent {
    const KIND: ContentKind = ContentKind::Outreach;

    fn from_document(doc: Document) -> Result<Self> {
        let fields = doc.fields();

        let image = fields.required_str("image")?;
        let category = fields
            .optional_str("category")?
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(Self {
            title: fields.required_str("title")?,
            description: fields.required_str("description")?,
            image_url: asset_path(&image),
            image,
            category,
            key: doc.key(),
        })
    }
}

/// Load all outreach events from `dir`
pub fn load_outreach_events(dir: &Path) -> Result<Vec<OutreachEvent>> {
    load_collection(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_events() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("a-library.md"),
            "---\ntitle: Library Demo\ndescription: Robot demo\nimage: public/media/outreach/lib.jpg\ncategory: workshop\n---\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("b-fair.md"),
            "---\ntitle: Science Fair\ndescription: Booth\nimage: /media/outreach/fair.jpg\n---\n",
        )
        .unwrap();

        let events = load_outreach_events(tmp.path()).unwrap();
        assert_eq!(events.len(), 2);

        assert_eq!(events[0].image, "public/media/outreach/lib.jpg");
        assert_eq!(events[0].image_url, "media/outreach/lib.jpg");
        assert_eq!(events[0].category, "workshop");

        assert_eq!(events[1].image_url, "/media/outreach/fair.jpg");
        assert_eq!(events[1].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_image_url_serialized_camel_case() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("a.md"),
            "---\ntitle: T\ndescription: D\nimage: public/x.jpg\n---\n",
        )
        .unwrap();

        let events = load_outreach_events(tmp.path()).unwrap();
        let json = serde_json::to_value(&events[0]).unwrap();
        assert_eq!(json["imageUrl"], "x.jpg");
        assert_eq!(json["image"], "public/x.jpg");
    }
}
