use scraper::Html;

use crate::parser::selectors;

/// Canonical listing URL from the document head. Saved captures keep the
/// `<link rel="canonical">` Zillow emits, which carries the ZPID.
pub fn canonical_url(doc: &Html) -> Option<String> {
    doc.select(&selectors::CANONICAL_LINK)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string)
}

// ── Tests ──
