//! Sponsors

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use super::loader::{load_collection, Document, Record};
use super::{ClosedSet, ContentKind};
use crate::error::Result;
use crate::helpers::asset_path;

/// Sponsorship level, ordered from highest to lowest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SponsorTier {
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl ClosedSet for SponsorTier {
    const VARIANTS: &'static [Self] = &[
        SponsorTier::Platinum,
        SponsorTier::Gold,
        SponsorTier::Silver,
        SponsorTier::Bronze,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            SponsorTier::Platinum => "Platinum",
            SponsorTier::Gold => "Gold",
            SponsorTier::Silver => "Silver",
            SponsorTier::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for SponsorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub name: String,
    /// Logo, relative to the public root
    pub logo: String,
    pub description: String,
    pub tier: SponsorTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub key: String,
}

impl Record for Sponsor {
    const KIND: ContentKind = ContentKind::Sponsors;

    fn from_document(doc: Document) -> Result<Self> {
        let fields = doc.fields();

        Ok(Self {
            name: fields.required_str("name")?,
            logo: asset_path(&fields.required_str("logo")?),
            description: fields.required_str("description")?,
            tier: fields.required_enum("tier")?,
            website: fields.optional_str("website")?,
            key: doc.key(),
        })
    }
}

/// Load all sponsors from `dir`
pub fn load_sponsors(dir: &Path) -> Result<Vec<Sponsor>> {
    load_collection(dir)
}

/// Group sponsors by tier, highest tier first, skipping empty tiers.
/// Sponsors keep their load order within a tier.
pub fn group_by_tier(sponsors: &[Sponsor]) -> IndexMap<SponsorTier, Vec<&Sponsor>> {
    let mut groups = IndexMap::new();
    for tier in SponsorTier::VARIANTS {
        let members: Vec<&Sponsor> = sponsors.iter().filter(|s| s.tier == *tier).collect();
        if !members.is_empty() {
            groups.insert(*tier, members);
        }
    }
    groups
}
