//! RemoteOK JSON API fetcher.

use super::FetchError;
use crate::listings::Listing;
use reqwest::Client;
use serde_json::Value;

const FEED: &str = "remoteok";
const FEED_URL: &str = "https://remoteok.com/api";

pub async fn fetch(client: &Client, limit: usize) -> Result<Vec<Listing>, FetchError> {
    let http = |source| FetchError::Http { feed: FEED, source };

    let rows: Vec<Value> = client
        .get(FEED_URL)
        .header(reqwest::header::USER_AGENT, "gigradar/0.1")
        .send()
        .await
        .map_err(http)?
        .error_for_status()
        .map_err(http)?
        .json()
        .await
        .map_err(http)?;

    // The first array element is a legal notice with no id; skip it and
    // anything else that is not a job record.
    Ok(rows
        .iter()
        .filter(|row| row.get("id").map(|id| !id.is_null()).unwrap_or(false))
        .take(limit)
        .map(map_record)
        .collect())
}

fn map_record(row: &Value) -> Listing {
    Listing {
        id: string_field(row, "id"),
        position: string_field(row, "position"),
        title: None,
        company: string_field(row, "company"),
        url: string_field(row, "url").or_else(|| string_field(row, "apply_url")),
        source: Some(FEED.to_string()),
        // Every RemoteOK posting is remote; rows without an explicit
        // location still carry the remote signal downstream.
        location: string_field(row, "location").or_else(|| Some("Remote".to_string())),
        description: string_field(row, "description"),
        tags: row
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        salary: string_field(row, "salary").or_else(|| string_field(row, "compensation")),
        published: string_field(row, "date"),
        is_remote: None,
    }
}

/// RemoteOK mixes numeric and string ids; normalize both to strings and
/// drop empty values entirely.
fn string_field(row: &Value, key: &str) -> Option<String> {
    match row.get(key) {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    }
}
