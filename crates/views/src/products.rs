//! Products page: fruit catalog and required supplies, searched together
//! from one search box. No facets on this page.

use mayanfruit_products::{FruitItem, RequiredSupply};

use crate::filter::text_matches;

/// Fruit entries whose name or id contains the search term.
pub fn filter_fruit<'a>(items: &'a [FruitItem], term: &str) -> Vec<&'a FruitItem> {
    items
        .iter()
        .filter(|item| text_matches(term, &[&item.name, item.id.as_str()]))
        .collect()
}

/// Required supplies whose name or id contains the search term.
pub fn filter_supplies<'a>(items: &'a [RequiredSupply], term: &str) -> Vec<&'a RequiredSupply> {
    items
        .iter()
        .filter(|item| text_matches(term, &[&item.name, item.id.as_str()]))
        .collect()
}
