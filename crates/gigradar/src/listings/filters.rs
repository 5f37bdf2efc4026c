//! Predicate filters applied to listings before scoring.
//!
//! Each filter is independently callable; [`ListingFilters::apply`] runs
//! them in a fixed order (query, remote-only, posted-within, company
//! blocklist, title allowlist) so audits see one canonical pipeline.

use super::Listing;
use crate::dates::parse_published;
use chrono::{DateTime, Duration, Utc};

/// Filter criteria gathered from the CLI or an API request.
#[derive(Debug, Clone, Default)]
pub struct ListingFilters {
    /// Query string; `AND` splits term groups, `OR` degrades to whitespace.
    pub query: Option<String>,
    pub remote_only: bool,
    pub posted_within_days: Option<i64>,
    /// Comma-separated company name fragments to exclude.
    pub company_blocklist: Option<String>,
    /// Comma-separated title fragments to allow; empty allows everything.
    pub title_allowlist: Option<String>,
}

impl ListingFilters {
    pub fn apply(&self, listings: Vec<Listing>, now: DateTime<Utc>) -> Vec<Listing> {
        let mut result = listings;

        if let Some(query) = self.query.as_deref() {
            result.retain(|listing| matches_query(listing, query));
        }

        if self.remote_only {
            result.retain(looks_remote);
        }

        if let Some(days) = self.posted_within_days {
            result.retain(|listing| posted_within(listing, days, now));
        }

        let blocked = split_fragments(self.company_blocklist.as_deref());
        if !blocked.is_empty() {
            result.retain(|listing| !company_blocked(listing, &blocked));
        }

        let allowed = split_fragments(self.title_allowlist.as_deref());
        if !allowed.is_empty() {
            result.retain(|listing| title_allowed(listing, &allowed));
        }

        result
    }
}

/// Split an `AND`-delimited query into term groups and require every word
/// of every group to appear in the combined title+company+description text.
///
/// `OR` carries no alternation semantics; it is dropped like whitespace.
pub fn matches_query(listing: &Listing, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    let haystack = [
        listing.display_title(),
        listing.company_or_empty(),
        listing.description_or_empty(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .map(|part| part.to_lowercase())
    .collect::<Vec<_>>()
    .join(" ");

    for group in query.split("AND") {
        let all_present = group
            .split_whitespace()
            .filter(|word| !word.eq_ignore_ascii_case("or") && !word.eq_ignore_ascii_case("and"))
            .all(|word| haystack.contains(&word.to_lowercase()));
        if !all_present {
            return false;
        }
    }

    true
}

/// Simple remote heuristic for filtering: an explicit flag or the word
/// "remote" in the location or title. Intentionally looser than the
/// pattern-based classifier in [`crate::scoring::remote`].
pub fn looks_remote(listing: &Listing) -> bool {
    if listing.is_remote == Some(true) {
        return true;
    }

    listing.location_or_empty().to_lowercase().contains("remote")
        || listing.display_title().to_lowercase().contains("remote")
}

/// Best-effort recency filter. A non-positive window disables the check
/// entirely rather than producing a cutoff in the future. Listings with
/// no date or an unparseable date pass: unknown is not evidence of
/// staleness.
pub fn posted_within(listing: &Listing, days: i64, now: DateTime<Utc>) -> bool {
    if days <= 0 {
        return true;
    }

    let raw = match listing.published.as_deref() {
        Some(raw) => raw,
        None => return true,
    };

    match parse_published(raw) {
        Some(published) => published >= now - Duration::days(days),
        None => true,
    }
}

/// Case-insensitive match of any blocked fragment against the company
/// field. Fragments match on word boundaries so "Acme" blocks
/// "Acme Corp" without also blocking "Acme2 Inc". Listings with no
/// company are never blocked.
pub fn company_blocked(listing: &Listing, blocked: &[String]) -> bool {
    let company = listing.company_or_empty().to_lowercase();
    if company.is_empty() {
        return false;
    }

    blocked
        .iter()
        .any(|fragment| crate::scoring::keywords::contains_word(&company, fragment))
}

/// Case-insensitive substring match of any allowed fragment against the
/// title. Callers skip this check entirely for an empty allowlist.
pub fn title_allowed(listing: &Listing, allowed: &[String]) -> bool {
    let title = listing.display_title().to_lowercase();
    allowed.iter().any(|fragment| title.contains(fragment))
}

fn split_fragments(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or("")
        .split(',')
        .map(|fragment| fragment.trim().to_lowercase())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}
