//! Listing domain types shared by the fetchers, filters, and scorers.

pub mod filters;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single job/gig posting collected from any feed.
///
/// No field is guaranteed present; every consumer treats absence as
/// empty/default rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Some feeds call the title "position"; both are carried so the
    /// composite identity stays faithful to the upstream record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Free-form salary/compensation text when a feed exposes it;
    /// informational only, never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    /// Raw publication date string; formats vary per feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    /// Explicit remote flag when the feed provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_remote: Option<bool>,
}

impl Listing {
    /// Position takes precedence over title when both are present.
    pub fn display_title(&self) -> &str {
        self.position
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("")
    }

    pub fn company_or_empty(&self) -> &str {
        self.company.as_deref().unwrap_or("")
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn location_or_empty(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}

/// A listing with its ranking score attached.
///
/// Attachment never touches the identity fields used for deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub score: f64,
}

/// Collapse duplicates on the composite identity (source, id, url, title),
/// keeping the first occurrence and preserving order.
pub fn dedupe_listings(listings: Vec<Listing>) -> Vec<Listing> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(listings.len());

    for listing in listings {
        let key = (
            listing.source.clone(),
            listing.id.clone(),
            listing.url.clone(),
            listing.title.clone(),
        );
        if seen.insert(key) {
            result.push(listing);
        }
    }

    result
}
