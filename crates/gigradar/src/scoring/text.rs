use crate::listings::Listing;

/// Build the lowercase search haystack for a listing: title/position,
/// company, description, each tag, then location, joined with single
/// spaces. Deterministic for identical input.
pub fn search_text(listing: &Listing) -> String {
    let mut parts: Vec<&str> = Vec::new();

    let title = listing.display_title();
    if !title.is_empty() {
        parts.push(title);
    }
    if let Some(company) = listing.company.as_deref() {
        if !company.is_empty() {
            parts.push(company);
        }
    }
    if let Some(description) = listing.description.as_deref() {
        if !description.is_empty() {
            parts.push(description);
        }
    }
    for tag in &listing.tags {
        if !tag.is_empty() {
            parts.push(tag);
        }
    }
    if let Some(location) = listing.location.as_deref() {
        if !location.is_empty() {
            parts.push(location);
        }
    }

    parts.join(" ").to_lowercase()
}
