//! Feed fetchers.
//!
//! Each fetcher maps one public feed to best-effort [`Listing`] records.
//! [`fetch_all`] isolates failures: one feed going dark only shrinks the
//! result set, it never empties it.

pub mod remoteok;
pub mod wwr;

use crate::listings::Listing;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {feed} failed")]
    Http {
        feed: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{feed} returned an unreadable feed payload")]
    Rss {
        feed: &'static str,
        #[source]
        source: rss::Error,
    },
}

/// Fetch every feed concurrently, tolerating individual failures.
pub async fn fetch_all(limit: usize) -> Vec<Listing> {
    let client = reqwest::Client::new();

    let (remoteok, wwr) = tokio::join!(
        remoteok::fetch(&client, limit),
        wwr::fetch(&client, limit),
    );

    let mut listings = Vec::new();

    match remoteok {
        Ok(mut batch) => {
            info!(count = batch.len(), feed = "remoteok", "fetched listings");
            listings.append(&mut batch);
        }
        Err(err) => warn!(error = %err, feed = "remoteok", "feed fetch failed; continuing"),
    }

    match wwr {
        Ok(mut batch) => {
            info!(count = batch.len(), feed = "weworkremotely", "fetched listings");
            listings.append(&mut batch);
        }
        Err(err) => warn!(error = %err, feed = "weworkremotely", "feed fetch failed; continuing"),
    }

    listings
}
