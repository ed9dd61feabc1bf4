//! Suppliers page: active/inactive facet plus free-text search.

use mayanfruit_parties::Supplier;

use crate::filter::{facet_matches, text_matches};
use crate::ratio::round1;

/// UI state of the suppliers page. `active: None` is the "all" facet value.
#[derive(Debug, Clone, Default)]
pub struct SupplierFilter<'a> {
    pub term: &'a str,
    pub active: Option<bool>,
}

impl SupplierFilter<'_> {
    pub fn matches(&self, supplier: &Supplier) -> bool {
        facet_matches(self.active, supplier.active)
            && text_matches(
                self.term,
                &[&supplier.name, &supplier.product, supplier.id.as_str()],
            )
    }
}

pub fn filter_suppliers<'a>(
    suppliers: &'a [Supplier],
    filter: &SupplierFilter<'_>,
) -> Vec<&'a Supplier> {
    suppliers.iter().filter(|s| filter.matches(s)).collect()
}

/// Header cards of the suppliers page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupplierStats {
    pub total: usize,
    pub active: usize,
    /// Mean rating to one decimal; `0.0` for an empty collection.
    pub average_rating: f64,
}

impl SupplierStats {
    pub fn compute(suppliers: &[Supplier]) -> Self {
        let total = suppliers.len();
        let average_rating = if total == 0 {
            0.0
        } else {
            round1(suppliers.iter().map(|s| s.rating).sum::<f64>() / total as f64)
        };
        Self {
            total,
            active: suppliers.iter().filter(|s| s.active).count(),
            average_rating,
        }
    }
}
