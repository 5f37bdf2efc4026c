//! Export writers for scored listings: JSON, CSV, and a Markdown digest.
//!
//! Absent fields always serialize as blanks; no writer errors on a
//! partial record.

use crate::listings::ScoredListing;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode listings as JSON")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode listings as CSV")]
    Csv(#[from] csv::Error),
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Pretty-printed JSON array of the scored listings.
pub fn write_json(listings: &[ScoredListing], path: &Path) -> Result<(), ExportError> {
    let body = serde_json::to_string_pretty(listings)?;
    fs::write(path, body).map_err(io_err(path))?;
    info!(path = %path.display(), rows = listings.len(), "wrote JSON export");
    Ok(())
}

/// Flat CSV whose header is the sorted union of keys appearing in any
/// listing. Rows leave missing columns blank.
pub fn write_csv(listings: &[ScoredListing], path: &Path) -> Result<(), ExportError> {
    if listings.is_empty() {
        fs::write(path, "").map_err(io_err(path))?;
        info!(path = %path.display(), "wrote empty CSV export");
        return Ok(());
    }

    let rows: Vec<Value> = listings
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<_, _>>()?;

    let columns: BTreeSet<String> = rows
        .iter()
        .filter_map(Value::as_object)
        .flat_map(|object| object.keys().cloned())
        .collect();

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&columns)?;
    for row in &rows {
        let record: Vec<String> = columns
            .iter()
            .map(|column| cell(row.get(column)))
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush().map_err(io_err(path))?;

    info!(path = %path.display(), rows = listings.len(), "wrote CSV export");
    Ok(())
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

/// Human-readable Markdown digest, highest score first in input order.
pub fn write_markdown(listings: &[ScoredListing], path: &Path) -> Result<(), ExportError> {
    let mut lines: Vec<String> = vec!["# Gig Radar Results".to_string(), String::new()];

    for (index, scored) in listings.iter().enumerate() {
        let listing = &scored.listing;
        let title = match listing.display_title() {
            "" => "(no title)",
            title => title,
        };
        lines.push(format!("## {}. {}", index + 1, title));

        let mut meta = Vec::new();
        if !listing.company_or_empty().is_empty() {
            meta.push(listing.company_or_empty().to_string());
        }
        if !listing.location_or_empty().is_empty() {
            meta.push(listing.location_or_empty().to_string());
        }
        if let Some(salary) = listing.salary.as_deref() {
            meta.push(salary.to_string());
        }
        if let Some(source) = listing.source.as_deref() {
            meta.push(format!("[{source}]"));
        }
        if !meta.is_empty() {
            lines.push(format!("**{}**", meta.join(" • ")));
        }

        lines.push(format!("_Score: {}_", scored.score));

        if let Some(url) = listing.url.as_deref() {
            lines.push(format!("[View listing]({url})"));
        }

        lines.push(String::new());
    }

    fs::write(path, lines.join("\n")).map_err(io_err(path))?;
    info!(path = %path.display(), rows = listings.len(), "wrote Markdown export");
    Ok(())
}
