use scraper::{ElementRef, Html};
use serde::Serialize;

use crate::parser::selectors;

/// Overview stats for a listing. All three fields or nothing: a missing
/// container, fewer than three emphasis elements, or a number that won't
/// parse all yield no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListingStats {
    pub days_on_market: u32,
    pub views: u32,
    pub saves: u32,
}

pub fn extract(doc: &Html) -> Option<ListingStats> {
    let container = doc.select(&selectors::STATS_CONTAINER).next()?;
    let emphasis: Vec<ElementRef> = container.select(&selectors::STATS_EMPHASIS).collect();
    if emphasis.len() < 3 {
        return None;
    }

    // Fixed document order: days, views, saves.
    Some(ListingStats {
        days_on_market: digits_of(emphasis[0])?,
        views: digits_of(emphasis[1])?,
        saves: digits_of(emphasis[2])?,
    })
}

/// Strip every non-digit character ("204 days" → 204, "1,188" → 1188)
/// before parsing.
fn digits_of(el: ElementRef) -> Option<u32> {
    let digits: String = el
        .text()
        .flat_map(str::chars)
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

// ── Tests ──
