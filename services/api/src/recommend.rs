//! The `recommend` subcommand: fetch, filter, rank, and print or export
//! a curated digest.

use chrono::Utc;
use clap::Args;
use gigradar::config::AppConfig;
use gigradar::error::AppError;
use gigradar::export;
use gigradar::fetch::fetch_all;
use gigradar::listings::filters::ListingFilters;
use gigradar::listings::{dedupe_listings, ScoredListing};
use gigradar::profiles::load_user_profile;
use gigradar::scoring::text::search_text;
use gigradar::scoring::{
    is_remote_ok, rank_with_policy, RemotePolicy, ScoringEngine, ScoringPolicy,
};
use gigradar::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Number of listings to fetch from each feed
    #[arg(long, default_value_t = 25)]
    pub(crate) limit: usize,
    /// How many top-ranked listings to keep
    #[arg(long, default_value_t = 10)]
    pub(crate) top: usize,
    /// Profile name to load from the profile directory
    #[arg(long, short)]
    pub(crate) profile: Option<String>,
    /// Keep remote/hybrid-friendly listings only
    #[arg(long)]
    pub(crate) remote_only: bool,
    /// Query string, e.g. "writer AND newsletter"
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Keep listings posted within the last N days
    #[arg(long)]
    pub(crate) posted_within: Option<i64>,
    /// Comma-separated company fragments to exclude
    #[arg(long)]
    pub(crate) company_block: Option<String>,
    /// Comma-separated title fragments to allow
    #[arg(long)]
    pub(crate) title_allow: Option<String>,
    /// Export path; format follows the extension (.json, .csv, or .md)
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

pub(crate) async fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let now = Utc::now();
    let listings = dedupe_listings(fetch_all(args.limit).await);
    info!(count = listings.len(), "fetched and deduplicated listings");

    let filters = ListingFilters {
        query: args.query.clone(),
        remote_only: false,
        posted_within_days: args.posted_within,
        company_blocklist: args.company_block.clone(),
        title_allowlist: args.title_allow.clone(),
    };
    let mut listings = filters.apply(listings, now);

    // The CLI remote gate uses the full classifier, accepting remote or
    // hybrid, rather than the simple substring filter.
    if args.remote_only {
        listings.retain(|listing| is_remote_ok(&search_text(listing), RemotePolicy::Lenient));
    }
    info!(count = listings.len(), "listings after filtering");

    // One scale per run: profile points when a profile is named, the
    // normalized weighted composite otherwise.
    let mut ranked = match args.profile.as_deref() {
        Some(name) => {
            let profile = load_user_profile(&config.profile_dir, name)?;
            rank_with_policy(listings, &ScoringPolicy::Profile(profile))
        }
        None => ScoringEngine::new(config.scoring.clone()).rank(listings, now),
    };
    ranked.truncate(args.top);

    print_digest(&ranked);

    if let Some(path) = args.out.as_deref() {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => export::write_csv(&ranked, path)?,
            Some("md") => export::write_markdown(&ranked, path)?,
            _ => export::write_json(&ranked, path)?,
        }
    }

    Ok(())
}

fn print_digest(ranked: &[ScoredListing]) {
    if ranked.is_empty() {
        println!("No listings matched the current filters.");
        return;
    }

    for (index, scored) in ranked.iter().enumerate() {
        let listing = &scored.listing;
        println!(
            "{:>2}. [{:>8.4}] {} - {} ({})",
            index + 1,
            scored.score,
            match listing.display_title() {
                "" => "(no title)",
                title => title,
            },
            match listing.company_or_empty() {
                "" => "unknown company",
                company => company,
            },
            listing.source.as_deref().unwrap_or("unknown source"),
        );
        if let Some(url) = listing.url.as_deref() {
            println!("      {url}");
        }
    }
}
