//! We Work Remotely RSS fetcher.

use super::FetchError;
use crate::listings::Listing;
use chrono::DateTime;
use regex::Regex;
use reqwest::Client;
use std::sync::OnceLock;

const FEED: &str = "weworkremotely";
const FEED_URL: &str = "https://weworkremotely.com/categories/remote-programming-jobs.rss";

pub async fn fetch(client: &Client, limit: usize) -> Result<Vec<Listing>, FetchError> {
    let http = |source| FetchError::Http { feed: FEED, source };

    let body = client
        .get(FEED_URL)
        .send()
        .await
        .map_err(http)?
        .error_for_status()
        .map_err(http)?
        .bytes()
        .await
        .map_err(http)?;

    let channel = rss::Channel::read_from(&body[..])
        .map_err(|source| FetchError::Rss { feed: FEED, source })?;

    Ok(channel.items().iter().take(limit).map(map_item).collect())
}

fn map_item(item: &rss::Item) -> Listing {
    // WWR titles read "Company: Role".
    let (company, title) = match item.title() {
        Some(raw) => match raw.split_once(": ") {
            Some((company, role)) => (Some(company.to_string()), Some(role.to_string())),
            None => (None, Some(raw.to_string())),
        },
        None => (None, None),
    };

    let id = item
        .guid()
        .map(|guid| guid.value().to_string())
        .or_else(|| item.link().map(str::to_string))
        .map(|value| format!("wwr-{value}"));

    Listing {
        id,
        title,
        position: None,
        company,
        url: item.link().map(str::to_string),
        source: Some(FEED.to_string()),
        location: None,
        description: item.description().map(strip_html),
        tags: Vec::new(),
        salary: None,
        published: item.pub_date().and_then(canonical_date),
        is_remote: Some(true),
    }
}

/// RSS carries RFC 2822 dates; reformat to the ISO shape the rest of the
/// pipeline parses, dropping values that do not parse at all.
fn canonical_date(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|dt| dt.to_utc().format("%Y-%m-%dT%H:%M:%SZ").to_string())
}

fn strip_html(html: &str) -> String {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    let tags = TAGS.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag pattern compiles"));

    let text = tags.replace_all(html, " ");
    let text = text
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
