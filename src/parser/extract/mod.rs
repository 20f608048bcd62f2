pub mod address;
pub mod attribution;
pub mod facts;
pub mod links;
pub mod media;
pub mod stats;

use scraper::{ElementRef, Html};
use serde::Serialize;

use crate::listing;

pub use attribution::MlsAttribution;
pub use facts::FactSheet;
pub use stats::ListingStats;

/// Everything one document parse produces. No state carries over between
/// documents.
#[derive(Debug, Serialize)]
pub struct ExtractedListing {
    pub name: String,
    pub address: Option<String>,
    pub image: Option<String>,
    pub canonical_url: Option<String>,
    pub zpid: Option<String>,
    pub stats: Option<ListingStats>,
    pub attribution: MlsAttribution,
    pub facts: FactSheet,
}

pub fn extract_all(name: &str, doc: &Html) -> ExtractedListing {
    let canonical_url = links::canonical_url(doc);
    let zpid = canonical_url
        .as_deref()
        .and_then(listing::property_id_from_url);

    ExtractedListing {
        name: name.to_string(),
        address: address::extract(doc),
        image: media::extract(doc),
        canonical_url,
        zpid,
        stats: stats::extract(doc),
        attribution: attribution::extract(doc),
        facts: facts::extract(doc),
    }
}

/// All text under an element, concatenated and trimmed as a whole.
pub(crate) fn text_content(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Text nodes individually trimmed and joined with single spaces, for
/// elements whose value is split across inline children.
pub(crate) fn spaced_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Tests ──
