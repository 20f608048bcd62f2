use scraper::Html;
use serde::Serialize;

use super::{spaced_text, text_content};
use crate::parser::selectors;

/// MLS attribution block. Every field is best-effort; an absent container
/// yields an empty record rather than an error.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MlsAttribution {
    pub listing_updated: Option<String>,
    pub agent: Option<String>,
    pub broker: Option<String>,
    pub source: Option<String>,
    pub mls_number: Option<String>,
    pub originating_mls: Option<String>,
}

impl MlsAttribution {
    pub fn is_empty(&self) -> bool {
        self.listing_updated.is_none()
            && self.agent.is_none()
            && self.broker.is_none()
            && self.source.is_none()
            && self.mls_number.is_none()
            && self.originating_mls.is_none()
    }
}

pub fn extract(doc: &Html) -> MlsAttribution {
    let mut data = MlsAttribution::default();

    let Some(info) = doc.select(&selectors::MLS_INFO).next() else {
        return data;
    };

    if let Some(updated) = info.select(&selectors::MLS_LAST_UPDATED).next() {
        let text = text_content(updated).replace("Listing updated:", "");
        data.listing_updated = Some(text.trim().to_string());
    }

    if let Some(seller) = info.select(&selectors::SELLER_ATTRIBUTION).next() {
        data.agent = seller
            .select(&selectors::LISTING_AGENT)
            .next()
            .map(spaced_text);
        data.broker = seller
            .select(&selectors::LISTING_BROKER)
            .next()
            .map(spaced_text);
    }

    // Source / MLS# / Originating MLS live in spans whose only stable
    // marker is the literal label prefix.
    if let Some(spacer) = info.select(&selectors::SOURCE_SPACER).next() {
        for span in spacer.select(&selectors::SOURCE_SPAN) {
            let text = text_content(span);
            if text.contains("Source:") {
                data.source = Some(strip_label(&text, "Source:"));
            } else if text.contains("MLS#:") {
                data.mls_number = Some(strip_label(&text, "MLS#:"));
            } else if text.contains("Originating MLS:") {
                data.originating_mls = Some(strip_label(&text, "Originating MLS:"));
            }
        }
    }

    data
}

fn strip_label(text: &str, label: &str) -> String {
    text.replace(label, "").replace(',', "").trim().to_string()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    const MLS_SNIPPET: &str = r#"
        <div aria-label="MLS information" class="styles__StyledAttribution-x">
            <p data-testid="current-list-attribution-last-updated">
                <span>Listing updated:</span> 08/05/2025 10:14 AM
            </p>
            <div data-testid="seller-attribution">
                <p data-testid="attribution-LISTING_AGENT"><span>Jane Smith</span><span>505-555-0142</span></p>
                <p data-testid="attribution-BROKER"><span>High Desert Realty</span><span>505-555-0100</span></p>
            </div>
            <div class="Spacer-c11n-8-111-1__sc-17suqs2-0">
                <span>Source: SWMLS,</span>
                <span>MLS#: 1063259,</span>
                <span>Originating MLS: Santa Fe MLS</span>
            </div>
        </div>
    "#;

    #[test]
    fn full_attribution() {
        let doc = Html::parse_document(MLS_SNIPPET);
        let data = extract(&doc);
        assert_eq!(data.listing_updated.as_deref(), Some("08/05/2025 10:14 AM"));
        assert_eq!(data.agent.as_deref(), Some("Jane Smith 505-555-0142"));
        assert_eq!(
            data.broker.as_deref(),
            Some("High Desert Realty 505-555-0100")
        );
        assert_eq!(data.source.as_deref(), Some("SWMLS"));
        assert_eq!(data.mls_number.as_deref(), Some("1063259"));
        assert_eq!(data.originating_mls.as_deref(), Some("Santa Fe MLS"));
    }

    #[test]
    fn missing_container_is_empty() {
        let doc = Html::parse_document("<div>no attribution</div>");
        assert!(extract(&doc).is_empty());
    }

    #[test]
    fn partial_attribution() {
        let doc = Html::parse_document(
            r#"<div aria-label="MLS information">
                <div class="Spacer-x"><span>MLS#: 99,</span></div>
            </div>"#,
        );
        let data = extract(&doc);
        assert_eq!(data.mls_number.as_deref(), Some("99"));
        assert!(data.agent.is_none());
        assert!(!data.is_empty());
    }
}
