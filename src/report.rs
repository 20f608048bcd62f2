//! Pure rendering of extracted listing data into the Markdown report.

use crate::parser::extract::{ExtractedListing, FactSheet, ListingStats};

/// Render the fact sheet: one `###` heading per group, one bold bullet per
/// category with facts joined by `; `, a separator after each group.
/// Fact text is emitted as-is; markdown-special characters are not
/// escaped.
pub fn render_facts(facts: &FactSheet) -> String {
    let mut out = String::new();
    for group in &facts.groups {
        out.push_str(&format!("### {}\n", title_case(&group.name)));
        for category in &group.categories {
            out.push_str(&format!(
                "* **{}:** {}\n",
                title_case(&category.name),
                category.facts.join("; ")
            ));
        }
        out.push_str("\n---\n");
    }
    out
}

pub fn render_stats(stats: &ListingStats) -> String {
    let mut out = String::from("### Listing Stats\n");
    out.push_str(&format!("* **Days on market:** {}\n", stats.days_on_market));
    out.push_str(&format!("* **Views:** {}\n", stats.views));
    out.push_str(&format!("* **Saves:** {}\n", stats.saves));
    out
}

/// Assemble the full per-listing report.
pub fn render_report(listing: &ExtractedListing) -> Vec<String> {
    let mut lines = Vec::new();
    let name = &listing.name;

    if let Some(image) = &listing.image {
        lines.push(format!("![{}]({})", name, image));
    }

    lines.push(format!("\n## Property: {}", name));
    match &listing.address {
        Some(address) => lines.push(format!("### Address: {}", address)),
        None => lines.push("No formatted address found.".to_string()),
    }
    lines.push(format!(
        "## Zillow Property ID: {}",
        listing.zpid.as_deref().unwrap_or("N/A")
    ));
    lines.push(String::new());

    match &listing.stats {
        Some(stats) => lines.push(render_stats(stats)),
        None => lines.push(format!("No stats retrieved for {}.", name)),
    }
    lines.push("\n---\n".to_string());

    if listing.attribution.is_empty() {
        lines.push(format!("No MLS data retrieved for {}.", name));
    } else {
        lines.push("## MLS Data:".to_string());
        let fields = [
            ("Listing updated", &listing.attribution.listing_updated),
            ("Listed by agent", &listing.attribution.agent),
            ("Listed by broker", &listing.attribution.broker),
            ("Source", &listing.attribution.source),
            ("MLS#", &listing.attribution.mls_number),
            ("Originating MLS", &listing.attribution.originating_mls),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                lines.push(format!("  - {}: {}", label, value));
            }
        }
    }
    lines.push("\n---\n".to_string());

    if listing.facts.is_empty() {
        lines.push(format!("No facts retrieved for {}.", name));
    } else {
        lines.push("## Facts:".to_string());
        lines.push(render_facts(&listing.facts));
    }
    lines.push("\n---\n".to_string());

    lines
}

/// Title-case headings: first letter of each alphabetic run uppercased,
/// the rest lowercased.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::{FactSheet, MlsAttribution};
    use crate::parser::process_document;

    #[test]
    fn empty_fact_sheet_renders_empty() {
        let rendered = render_facts(&FactSheet::default());
        assert!(rendered.is_empty());
        assert!(!rendered.contains('#'));
    }

    #[test]
    fn facts_render_shape() {
        let doc = r#"<div data-testid="category-group">
            <h3 class="StyledCategoryGroupHeading-x">Community &amp; hoa</h3>
            <div data-testid="fact-category">
                <h6 class="StyledHeading-x">HOA</h6>
                <ul><li>Has HOA: No</li><li>Region: Las Vegas</li></ul>
            </div>
        </div>"#;
        let listing = process_document("test", doc);
        let rendered = render_facts(&listing.facts);
        assert_eq!(
            rendered,
            "### Community & Hoa\n* **Hoa:** Has HOA: No; Region: Las Vegas\n\n---\n"
        );
    }

    #[test]
    fn stats_render_shape() {
        let stats = ListingStats {
            days_on_market: 204,
            views: 1188,
            saves: 61,
        };
        let rendered = render_stats(&stats);
        assert!(rendered.starts_with("### Listing Stats\n"));
        assert!(rendered.contains("* **Days on market:** 204\n"));
        assert!(rendered.contains("* **Views:** 1188\n"));
        assert!(rendered.contains("* **Saves:** 61\n"));
    }

    #[test]
    fn title_casing() {
        assert_eq!(title_case("utilities & green energy"), "Utilities & Green Energy");
        assert_eq!(title_case("bedrooms & bathrooms"), "Bedrooms & Bathrooms");
        assert_eq!(title_case("HOA"), "Hoa");
    }

    #[test]
    fn report_with_nothing_extracted() {
        let listing = process_document("empty page", "<html><body></body></html>");
        let lines = render_report(&listing);
        let body = lines.join("\n");
        assert!(body.contains("## Property: empty page"));
        assert!(body.contains("No formatted address found."));
        assert!(body.contains("## Zillow Property ID: N/A"));
        assert!(body.contains("No stats retrieved for empty page."));
        assert!(body.contains("No MLS data retrieved for empty page."));
        assert!(body.contains("No facts retrieved for empty page."));
    }

    #[test]
    fn report_mls_field_order() {
        let listing = ExtractedListing {
            name: "x".into(),
            address: None,
            image: None,
            canonical_url: None,
            zpid: None,
            stats: None,
            attribution: MlsAttribution {
                listing_updated: Some("08/05/2025".into()),
                agent: Some("Jane Smith".into()),
                broker: None,
                source: Some("SWMLS".into()),
                mls_number: Some("1063259".into()),
                originating_mls: None,
            },
            facts: FactSheet::default(),
        };
        let lines = render_report(&listing);
        let mls_lines: Vec<&str> = lines
            .iter()
            .map(String::as_str)
            .filter(|l| l.starts_with("  - "))
            .collect();
        assert_eq!(
            mls_lines,
            vec![
                "  - Listing updated: 08/05/2025",
                "  - Listed by agent: Jane Smith",
                "  - Source: SWMLS",
                "  - MLS#: 1063259",
            ]
        );
    }
}
