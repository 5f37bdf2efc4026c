use crate::search::{clamp_limit, run_search, SearchResponse};
use axum::extract::Query;
use axum::routing::{get, post};
use axum::{Json, Router};
use gigradar::profiles::{builtin_profile_or_default, SearchProfile};
use serde::Deserialize;
use serde_json::json;

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/gigs", get(gigs_for_builtin_profile))
        .route("/gigs/search", post(search_with_profile))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "message": "gig radar backend is running" }))
}

#[derive(Debug, Deserialize)]
struct GigsQuery {
    profile: Option<String>,
    limit: Option<usize>,
}

/// Simple profile-key endpoint. Unknown keys fall back to the default
/// built-in profile instead of erroring.
async fn gigs_for_builtin_profile(Query(params): Query<GigsQuery>) -> Json<SearchResponse> {
    let builtin = builtin_profile_or_default(params.profile.as_deref().unwrap_or(""));
    let response = run_search(builtin.to_search_profile(), clamp_limit(params.limit)).await;
    Json(response)
}

#[derive(Debug, Deserialize)]
struct LimitQuery {
    limit: Option<usize>,
}

/// Multi-user endpoint: accepts a JSON profile body and curates against it.
async fn search_with_profile(
    Query(params): Query<LimitQuery>,
    Json(profile): Json<SearchProfile>,
) -> Json<SearchResponse> {
    let response = run_search(profile, clamp_limit(params.limit)).await;
    Json(response)
}
