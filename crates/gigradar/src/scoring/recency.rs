use crate::dates::parse_published;
use chrono::{DateTime, Utc};

/// Exponential half-life decay over the listing's publication date.
///
/// Unknown or unparseable dates score 0.0: "no freshness signal", not
/// "very old". A non-positive half-life also scores 0.0 so the exponent
/// never degenerates.
pub fn recency_score(published: Option<&str>, half_life_days: i64, now: DateTime<Utc>) -> f64 {
    let published = match published.and_then(parse_published) {
        Some(dt) => dt,
        None => return 0.0,
    };

    if half_life_days <= 0 {
        return 0.0;
    }

    let age_days = ((now - published).num_seconds() as f64 / 86_400.0).max(0.0);
    0.5_f64.powf(age_days / half_life_days as f64)
}
