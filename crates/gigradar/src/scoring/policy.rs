//! Flat-points scoring policies.
//!
//! Point scores live on a different scale than the normalized weighted
//! composite in [`super::ScoringEngine`]; a ranked list uses one scale or
//! the other, never both.

use crate::listings::Listing;
use crate::profiles::{SearchProfile, StaticPreferences, UserProfile};

/// Scoring policy dispatched by the composite scorer. Static mode uses
/// the built-in preference set; profile mode layers per-user tiers on
/// top of the same base heuristics.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringPolicy {
    Static(StaticPreferences),
    Profile(UserProfile),
}

impl ScoringPolicy {
    /// Flat-points score for a listing. Pure: same listing and policy
    /// always produce the same score.
    pub fn points(&self, listing: &Listing) -> f64 {
        let title = listing.display_title().to_lowercase();
        let description = listing.description_or_empty().to_lowercase();
        let location = listing.location_or_empty().to_lowercase();
        let text = format!("{title}\n{description}");

        let mut score = base_points(&text);

        if let ScoringPolicy::Profile(profile) = self {
            score += profile_points(profile, &title, &location, &text);
        }

        score
    }
}

/// Generic base heuristics shared by both modes.
fn base_points(text: &str) -> f64 {
    let mut score = 0.0;

    if text.contains("remote") || text.contains("work from home") {
        score += 5.0;
    }
    if mentions_onsite_without_remote(text) {
        score -= 5.0;
    }
    if text.contains("senior") {
        score += 1.0;
    }
    if text.contains("junior") || text.contains("entry-level") {
        score -= 1.0;
    }

    score
}

fn profile_points(profile: &UserProfile, title: &str, location: &str, text: &str) -> f64 {
    let mut score = 0.0;

    // Missing must-haves sink the listing without hard-excluding it.
    if !profile.keywords_must_have.is_empty() {
        let any_missing = profile
            .keywords_must_have
            .iter()
            .any(|keyword| !text.contains(&keyword.to_lowercase()));
        if any_missing {
            score -= 50.0;
        }
    }

    for keyword in &profile.keywords_nice_to_have {
        if text.contains(&keyword.to_lowercase()) {
            score += 3.0;
        }
    }

    for keyword in &profile.keywords_avoid {
        if text.contains(&keyword.to_lowercase()) {
            score -= 10.0;
        }
    }

    for desired in &profile.titles_include {
        if title.contains(&desired.to_lowercase()) {
            score += 8.0;
        }
    }

    if profile.remote_only && mentions_onsite_without_remote(text) {
        score -= 15.0;
    }

    // Flat bonus regardless of how many preferred locations match.
    if !profile.locations_preferred.is_empty()
        && profile
            .locations_preferred
            .iter()
            .any(|preferred| location.contains(&preferred.to_lowercase()))
    {
        score += 5.0;
    }

    if profile.max_hours_per_week.is_some() && suggests_full_time(text) {
        score -= 5.0;
    }

    for level in &profile.preferred_seniority {
        if text.contains(&level.to_lowercase()) {
            score += 4.0;
        }
    }

    score
}

fn mentions_onsite_without_remote(text: &str) -> bool {
    (text.contains("onsite") || text.contains("on-site")) && !text.contains("remote")
}

fn suggests_full_time(text: &str) -> bool {
    text.contains("full-time") || text.contains("40 hours") || text.contains("40hrs")
}

/// Points used by the interactive search endpoints: the static base
/// heuristics plus a flat boost per profile keyword found in the
/// title/description text.
pub fn search_points(listing: &Listing, profile: &SearchProfile) -> f64 {
    let haystack = format!(
        "{} {}",
        listing.display_title().to_lowercase(),
        listing.description_or_empty().to_lowercase()
    );

    let hits = profile
        .keywords
        .iter()
        .map(|keyword| keyword.to_lowercase())
        .filter(|keyword| !keyword.is_empty() && haystack.contains(keyword))
        .count();

    let base = ScoringPolicy::Static(StaticPreferences::default()).points(listing);
    base + hits as f64 * 10.0
}
