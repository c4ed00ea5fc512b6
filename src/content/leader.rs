//! Team leader bios

use serde::Serialize;
use std::path::Path;

use super::loader::{load_collection, Document, Record};
use super::ContentKind;
use crate::error::Result;
use crate::helpers::asset_path;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leader {
    pub name: String,
    pub role: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Portrait, relative to the public root
    pub image: String,
    pub key: String,
}

impl Record for Leader {
    const KIND: ContentKind = ContentKind::Leaders;

    fn from_document(doc: Document) -> Result<Self> {
        let fields = doc.fields();

        Ok(Self {
            name: fields.required_str("name")?,
            role: fields.required_str("role")?,
            description: fields.required_str("description")?,
            linkedin: fields.optional_str("linkedin")?,
            github: fields.optional_str("github")?,
            image: asset_path(&fields.required_str("image")?),
            key: doc.key(),
        })
    }
}

/// Load all leader bios from `dir`
pub fn load_leaders(dir: &Path) -> Result<Vec<Leader>> {
    load_collection(dir)
}
