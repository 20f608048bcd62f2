use scraper::Html;
use serde::Serialize;

use super::text_content;
use crate::parser::selectors;

/// Categories without their own sub-heading land here.
const DEFAULT_CATEGORY: &str = "Miscellaneous";

/// Nested, insertion-ordered fact sheet: group → category → facts.
/// Repeated category names under one group concatenate their fact lists
/// in encounter order; repeated group names merge into the existing group.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FactSheet {
    pub groups: Vec<FactGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactGroup {
    pub name: String,
    pub categories: Vec<FactCategory>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactCategory {
    pub name: String,
    pub facts: Vec<String>,
}

impl FactSheet {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn push_facts(&mut self, group: &str, category: &str, facts: Vec<String>) {
        let group = match self.groups.iter_mut().find(|g| g.name == group) {
            Some(existing) => existing,
            None => {
                self.groups.push(FactGroup {
                    name: group.to_string(),
                    categories: Vec::new(),
                });
                self.groups.last_mut().unwrap()
            }
        };
        match group.categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => existing.facts.extend(facts),
            None => group.categories.push(FactCategory {
                name: category.to_string(),
                facts,
            }),
        }
    }
}

pub fn extract(doc: &Html) -> FactSheet {
    let mut sheet = FactSheet::default();

    for group_el in doc.select(&selectors::CATEGORY_GROUP) {
        // A group without its heading has nothing to file facts under.
        let Some(heading) = group_el.select(&selectors::GROUP_HEADING).next() else {
            continue;
        };
        let group_name = text_content(heading);

        for category_el in group_el.select(&selectors::FACT_CATEGORY) {
            let category_name = category_el
                .select(&selectors::CATEGORY_HEADING)
                .next()
                .map(text_content)
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
            let facts: Vec<String> = category_el
                .select(&selectors::FACT_ITEM)
                .map(text_content)
                .collect();
            sheet.push_facts(&group_name, &category_name, facts);
        }
    }

    sheet
}

// ── Tests ──
