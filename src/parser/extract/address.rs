use scraper::Html;

use super::text_content;
use crate::parser::selectors;

/// Street address as shown on the page, or None when the wrapper is
/// missing (e.g. a CAPTCHA interstitial was captured instead of a
/// listing).
pub fn extract(doc: &Html) -> Option<String> {
    doc.select(&selectors::ADDRESS_WRAPPER)
        .next()
        .map(text_content)
        .filter(|text| !text.is_empty())
}

// ── Tests ──
