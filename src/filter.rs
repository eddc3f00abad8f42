// Search and facet filtering over in-memory listings
use crate::listing::{Faq, Listing};

// Sentinel label for "no facet selected"
pub const ALL_FACET: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    All,
    Value(String),
}

impl Facet {
    // Maps a UI label to a facet; the "All" label is the sentinel
    pub fn from_label(label: &str) -> Self {
        if label == ALL_FACET {
            Facet::All
        } else {
            Facet::Value(label.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Value(selected) => selected == value,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub facet: Facet,
    pub max_price: Option<u64>,
}

impl FilterCriteria {
    pub fn new(query: &str, facet: Facet, max_price: Option<u64>) -> Self {
        Self {
            query: query.to_string(),
            facet,
            max_price,
        }
    }

    // Criteria that only constrain price, as on first page load
    pub fn with_ceiling(max_price: u64) -> Self {
        Self {
            max_price: Some(max_price),
            ..Default::default()
        }
    }

    fn matches_query<T: Listing>(&self, item: &T, needle: &str) -> bool {
        needle.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }

    fn matches_price<T: Listing>(&self, item: &T) -> bool {
        match (self.max_price, item.price()) {
            (Some(max), Some(price)) => price <= max,
            _ => true,
        }
    }
}

// Returns the items matching every predicate, in their original order
pub fn filter_listing<T: Listing + Clone>(items: &[T], criteria: &FilterCriteria) -> Vec<T> {
    let needle = criteria.query.to_lowercase();
    let mut filtered = Vec::new();

    for item in items {
        if !criteria.matches_query(item, &needle) {
            continue;
        }

        if !criteria.facet.matches(item.facet()) {
            continue;
        }

        if !criteria.matches_price(item) {
            continue;
        }

        filtered.push(item.clone());
    }

    filtered
}

// Help center search.
//
// A non-empty query searches questions and answers across every category;
// an empty query shows only the active category.
pub fn filter_faqs(faqs: &[Faq], active_category: &str, query: &str) -> Vec<Faq> {
    let needle = query.to_lowercase();

    faqs.iter()
        .filter(|faq| {
            if needle.is_empty() {
                faq.category == active_category
            } else {
                faq.question.to_lowercase().contains(&needle)
                    || faq.answer.to_lowercase().contains(&needle)
            }
        })
        .cloned()
        .collect()
}

// "All" followed by each distinct facet value in first-seen order
pub fn facet_values<T: Listing>(items: &[T]) -> Vec<String> {
    let mut values = vec![ALL_FACET.to_string()];
    for item in items {
        if !values.iter().any(|v| v == item.facet()) {
            values.push(item.facet().to_string());
        }
    }
    values
}
