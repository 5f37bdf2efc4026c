//! Heuristic relevance scoring.
//!
//! Two scoring scales coexist and are never merged into one ranked list:
//! the normalized weighted composite in [0, 1] produced by
//! [`ScoringEngine`], and the flat point scores produced by
//! [`ScoringPolicy`]. Every scoring call is a pure function of the
//! listing plus immutable settings, so ranking is reproducible.

pub mod keywords;
pub mod policy;
pub mod recency;
pub mod remote;
pub mod text;

pub use policy::{search_points, ScoringPolicy};
pub use remote::{classify_remote, is_remote_ok, RemoteCheckResult, RemotePolicy, WorkMode};

use crate::config::ScoringSettings;
use crate::listings::{Listing, ScoredListing};
use crate::profiles::SearchProfile;
use chrono::{DateTime, Utc};

/// Terms that loosely signal a remote/global listing for the weighted
/// composite's binary remote flag. Deliberately looser than the
/// pattern-based classifier.
const LOOSE_REMOTE_TERMS: &[&str] = &[
    "remote",
    "anywhere",
    "work from anywhere",
    "distributed",
    "global",
];

/// Composite scorer over process-wide settings. Safe to share read-only
/// across concurrent scoring calls.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    settings: ScoringSettings,
}

impl ScoringEngine {
    pub fn new(settings: ScoringSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ScoringSettings {
        &self.settings
    }

    /// Weighted composite of keyword ratio, loose remote flag, and
    /// recency decay, in [0, 1] rounded to 4 decimal places.
    pub fn weighted_score(&self, listing: &Listing, now: DateTime<Utc>) -> f64 {
        self.weighted_score_with(listing, &self.settings.keywords, now)
    }

    /// Same composite but with the keyword list built from a caller
    /// profile (keywords + skills + preferred roles).
    pub fn weighted_score_for_profile(
        &self,
        listing: &Listing,
        profile: &SearchProfile,
        now: DateTime<Utc>,
    ) -> f64 {
        self.weighted_score_with(listing, &profile.combined_keywords(), now)
    }

    fn weighted_score_with(
        &self,
        listing: &Listing,
        keyword_list: &[String],
        now: DateTime<Utc>,
    ) -> f64 {
        let haystack = text::search_text(listing);
        let keyword_component = keywords::keyword_ratio(&haystack, keyword_list);
        let remote_component = if loose_remote_signal(listing) { 1.0 } else { 0.0 };
        let recency_component = recency::recency_score(
            listing.published.as_deref(),
            self.settings.half_life_days,
            now,
        );

        let weights = &self.settings.weights;
        round4(
            keyword_component * weights.keywords
                + remote_component * weights.remote
                + recency_component * weights.recency,
        )
    }

    /// Score every listing with the weighted composite and sort high to
    /// low. The sort is stable, so equal scores keep their input order.
    pub fn rank(&self, listings: Vec<Listing>, now: DateTime<Utc>) -> Vec<ScoredListing> {
        let mut scored: Vec<ScoredListing> = listings
            .into_iter()
            .map(|listing| {
                let score = self.weighted_score(&listing, now);
                ScoredListing { listing, score }
            })
            .collect();
        sort_descending(&mut scored);
        scored
    }
}

/// Score every listing with a flat-points policy and sort high to low.
pub fn rank_with_policy(listings: Vec<Listing>, policy: &ScoringPolicy) -> Vec<ScoredListing> {
    let mut scored: Vec<ScoredListing> = listings
        .into_iter()
        .map(|listing| {
            let score = policy.points(&listing);
            ScoredListing { listing, score }
        })
        .collect();
    sort_descending(&mut scored);
    scored
}

/// Loose remote signal over title, location, tags, and description.
pub fn loose_remote_signal(listing: &Listing) -> bool {
    let haystack = [
        listing.display_title().to_string(),
        listing.location_or_empty().to_string(),
        listing.tags.join(" "),
        listing.description_or_empty().to_string(),
    ]
    .join(" ")
    .to_lowercase();

    LOOSE_REMOTE_TERMS.iter().any(|term| haystack.contains(term))
}

fn sort_descending(scored: &mut [ScoredListing]) {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoreWeights;
    use chrono::Duration;

    fn settings(keywords: &[&str]) -> ScoringSettings {
        ScoringSettings {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            weights: ScoreWeights::normalized(0.7, 0.2, 0.1),
            half_life_days: 21,
        }
    }

    fn listing(title: &str, location: &str, published: Option<String>) -> Listing {
        Listing {
            title: Some(title.to_string()),
            location: Some(location.to_string()),
            published,
            ..Listing::default()
        }
    }

    #[test]
    fn weighted_score_stays_in_unit_interval() {
        let engine = ScoringEngine::new(settings(&["copywriter"]));
        let now = Utc::now();
        let fresh = listing(
            "Remote Copywriter",
            "Anywhere",
            Some(now.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
        );

        let score = engine.weighted_score(&fresh, now);
        assert!(score > 0.0 && score <= 1.0);
        // Full keyword + remote + fresh recency saturate the composite.
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn weighted_score_is_rounded_to_four_places() {
        let engine = ScoringEngine::new(settings(&["copywriter", "email", "seo"]));
        let now = Utc::now();
        let partial = listing("Remote Copywriter", "Anywhere", None);

        let score = engine.weighted_score(&partial, now);
        assert_eq!(score, (score * 10_000.0).round() / 10_000.0);
    }

    #[test]
    fn weighted_score_is_deterministic() {
        let engine = ScoringEngine::new(settings(&["copywriter"]));
        let now = Utc::now();
        let l = listing("Remote Copywriter", "Anywhere", Some("2025-01-01".to_string()));

        assert_eq!(engine.weighted_score(&l, now), engine.weighted_score(&l, now));
    }

    #[test]
    fn rank_sorts_descending_and_keeps_ties_stable() {
        let engine = ScoringEngine::new(settings(&["copywriter"]));
        let now = Utc::now();
        let strong = listing("Remote Copywriter", "Anywhere", None);
        let mut tied_a = listing("Editor", "Office", None);
        tied_a.id = Some("a".to_string());
        let mut tied_b = listing("Editor", "Office", None);
        tied_b.id = Some("b".to_string());

        let ranked = engine.rank(vec![tied_a, strong, tied_b], now);

        assert_eq!(ranked[0].listing.title.as_deref(), Some("Remote Copywriter"));
        assert_eq!(ranked[1].listing.id.as_deref(), Some("a"));
        assert_eq!(ranked[2].listing.id.as_deref(), Some("b"));
    }

    #[test]
    fn profile_keywords_drive_the_weighted_score() {
        let engine = ScoringEngine::new(settings(&[]));
        let now = Utc::now();
        let l = listing("Remote Copywriter", "Anywhere", None);

        let matching = SearchProfile {
            keywords: vec!["copywriter".to_string()],
            ..SearchProfile::default()
        };
        let unrelated = SearchProfile {
            keywords: vec!["surgeon".to_string()],
            ..SearchProfile::default()
        };

        let hit = engine.weighted_score_for_profile(&l, &matching, now);
        let miss = engine.weighted_score_for_profile(&l, &unrelated, now);
        assert!(hit > miss);
    }

    #[test]
    fn loose_remote_signal_reads_all_text_fields() {
        let mut l = Listing::default();
        assert!(!loose_remote_signal(&l));

        l.tags = vec!["Distributed".to_string()];
        assert!(loose_remote_signal(&l));

        let by_location = listing("Editor", "Work from Anywhere", None);
        assert!(loose_remote_signal(&by_location));
    }

    #[test]
    fn recency_decay_orders_fresh_before_stale() {
        let engine = ScoringEngine::new(settings(&[]));
        let now = Utc::now();
        let fresh = listing(
            "Remote Role",
            "Anywhere",
            Some(now.format("%Y-%m-%d").to_string()),
        );
        let stale = listing(
            "Remote Role",
            "Anywhere",
            Some((now - Duration::days(120)).format("%Y-%m-%d").to_string()),
        );

        assert!(engine.weighted_score(&fresh, now) > engine.weighted_score(&stale, now));
    }
}
