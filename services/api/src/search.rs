//! Shared search pipeline behind the HTTP endpoints.

use gigradar::fetch::fetch_all;
use gigradar::listings::{dedupe_listings, Listing, ScoredListing};
use gigradar::profiles::SearchProfile;
use gigradar::scoring::search_points;
use serde::Serialize;
use tracing::info;

/// Listings requested from each feed before filtering and ranking.
const FETCH_BATCH: usize = 50;

#[derive(Debug, Serialize)]
pub(crate) struct SearchResponse {
    pub(crate) profile_used: SearchProfile,
    pub(crate) gigs: Vec<ScoredListing>,
}

/// Fetch, disqualify, score, and truncate. Feed failures are already
/// isolated inside `fetch_all`, so the worst case is an empty digest.
pub(crate) async fn run_search(profile: SearchProfile, limit: usize) -> SearchResponse {
    let raw = dedupe_listings(fetch_all(FETCH_BATCH).await);

    let mut pool: Vec<Listing> = raw
        .iter()
        .filter(|listing| !profile.disqualifies(listing))
        .cloned()
        .collect();

    if pool.is_empty() && !raw.is_empty() {
        info!("every listing hit a disqualifier; falling back to the unfiltered set");
        pool = raw;
    }

    let mut scored: Vec<ScoredListing> = pool
        .into_iter()
        .map(|listing| {
            let score = search_points(&listing, &profile);
            ScoredListing { listing, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);

    info!(results = scored.len(), "search pipeline complete");

    SearchResponse {
        profile_used: profile,
        gigs: scored,
    }
}

pub(crate) fn clamp_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(10).clamp(1, 50)
}
