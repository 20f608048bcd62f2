use scraper::Html;

use crate::parser::selectors;

/// URL of the hero photo: the first `<img>` inside the first media-stream
/// tile.
pub fn extract(doc: &Html) -> Option<String> {
    let tile = doc.select(&selectors::MEDIA_TILE).next()?;
    let img = tile.select(&selectors::MEDIA_IMG).next()?;
    img.value().attr("src").map(str::to_string)
}

// ── Tests ──
