use chrono::{Duration, Utc};
use gigradar::config::{ScoreWeights, ScoringSettings};
use gigradar::listings::filters::ListingFilters;
use gigradar::listings::{dedupe_listings, Listing};
use gigradar::profiles::UserProfile;
use gigradar::scoring::{rank_with_policy, ScoringEngine, ScoringPolicy};

fn listing(id: &str, title: &str, company: &str, description: &str, location: &str) -> Listing {
    Listing {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        company: Some(company.to_string()),
        description: Some(description.to_string()),
        location: Some(location.to_string()),
        source: Some("remoteok".to_string()),
        url: Some(format!("https://example.com/{id}")),
        ..Listing::default()
    }
}

fn settings(keywords: &[&str]) -> ScoringSettings {
    ScoringSettings {
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        weights: ScoreWeights::normalized(0.7, 0.2, 0.1),
        half_life_days: 21,
    }
}

#[test]
fn filter_score_rank_flow_produces_a_curated_digest() {
    let now = Utc::now();
    let fresh = (now - Duration::days(1)).format("%Y-%m-%d").to_string();

    let mut copywriter = listing(
        "1",
        "Remote Copywriter",
        "Papermill",
        "Write the weekly newsletter for a remote-first team",
        "Anywhere",
    );
    copywriter.published = Some(fresh.clone());

    let mut blocked = listing(
        "2",
        "Newsletter Writer",
        "Acme Corp",
        "Writer for the company newsletter",
        "Remote",
    );
    blocked.published = Some(fresh.clone());

    let mut unrelated = listing(
        "3",
        "Forklift Operator",
        "Globex",
        "Warehouse shift work",
        "Des Moines",
    );
    unrelated.published = Some(fresh);

    let duplicate = copywriter.clone();

    let filters = ListingFilters {
        query: Some("writer AND newsletter".to_string()),
        company_blocklist: Some("Acme".to_string()),
        ..ListingFilters::default()
    };

    let deduped = dedupe_listings(vec![copywriter, blocked, unrelated, duplicate]);
    assert_eq!(deduped.len(), 3);

    let filtered = filters.apply(deduped, now);
    // The query keeps both writer listings; the blocklist removes Acme.
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id.as_deref(), Some("1"));

    let engine = ScoringEngine::new(settings(&["copywriter", "newsletter"]));
    let ranked = engine.rank(filtered, now);

    assert_eq!(ranked.len(), 1);
    assert!(ranked[0].score > 0.0 && ranked[0].score <= 1.0);
}

#[test]
fn profile_gate_sinks_listings_without_hard_excluding_them() {
    let writer_gig = listing(
        "1",
        "Remote Copywriter",
        "Papermill",
        "Must work 40 hours, no on-site required",
        "Anywhere",
    );

    let copywriter_profile = ScoringPolicy::Profile(UserProfile {
        keywords_must_have: vec!["copywriter".to_string()],
        remote_only: true,
        ..UserProfile::default()
    });
    let illustrator_profile = ScoringPolicy::Profile(UserProfile {
        keywords_must_have: vec!["illustrator".to_string()],
        ..UserProfile::default()
    });

    let matched = rank_with_policy(vec![writer_gig.clone()], &copywriter_profile);
    let gated = rank_with_policy(vec![writer_gig], &illustrator_profile);

    // The gated listing stays in the result set, just far below.
    assert_eq!(gated.len(), 1);
    assert!(matched[0].score > gated[0].score);
}

#[test]
fn ranked_output_keeps_identity_fields_intact() {
    let original = listing("7", "Remote Editor", "Acme", "Edit remote content", "Anywhere");
    let engine = ScoringEngine::new(settings(&[]));

    let ranked = engine.rank(vec![original.clone()], Utc::now());

    assert_eq!(ranked[0].listing.id, original.id);
    assert_eq!(ranked[0].listing.source, original.source);
    assert_eq!(ranked[0].listing.url, original.url);
    assert_eq!(ranked[0].listing.title, original.title);
}
