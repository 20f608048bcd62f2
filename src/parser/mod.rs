pub mod extract;
pub mod selectors;

use scraper::Html;

use extract::ExtractedListing;

/// Two-pass pipeline: HTML text → parsed document → extracted listing data.
pub fn process_document(name: &str, html: &str) -> ExtractedListing {
    let doc = Html::parse_document(html);
    extract::extract_all(name, &doc)
}

/// Name for a raw capture: the on-page address when present, else the
/// address segment of the canonical listing URL.
pub fn capture_name(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    if let Some(address) = extract::address::extract(&doc) {
        return Some(address);
    }
    extract::links::canonical_url(&doc)
        .as_deref()
        .map(crate::listing::property_name_from_url)
        .filter(|name| name != crate::listing::UNKNOWN_PROPERTY)
}
