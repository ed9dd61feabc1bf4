//! Customers page: origin facet plus free-text search.

use mayanfruit_parties::{Customer, CustomerOrigin};

use crate::filter::{facet_matches, text_matches};

/// UI state of the customers page.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter<'a> {
    pub term: &'a str,
    pub origin: Option<CustomerOrigin>,
}

impl CustomerFilter<'_> {
    pub fn matches(&self, customer: &Customer) -> bool {
        facet_matches(self.origin, customer.origin)
            && text_matches(
                self.term,
                &[&customer.name, customer.id.as_str(), &customer.contact],
            )
    }
}

pub fn filter_customers<'a>(
    customers: &'a [Customer],
    filter: &CustomerFilter<'_>,
) -> Vec<&'a Customer> {
    customers.iter().filter(|c| filter.matches(c)).collect()
}

/// Header cards of the customers page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerStats {
    pub total: usize,
    pub local: usize,
    pub foreign: usize,
}

impl CustomerStats {
    pub fn compute(customers: &[Customer]) -> Self {
        Self {
            total: customers.len(),
            local: customers
                .iter()
                .filter(|c| c.origin == CustomerOrigin::Local)
                .count(),
            foreign: customers
                .iter()
                .filter(|c| c.origin == CustomerOrigin::Foreign)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mayanfruit_store::seed;

    #[test]
    fn facet_and_search_must_both_match() {
        // Facet local + search "export": Export Global is foreign, so the
        // result set is empty even though the search alone would match it.
        let customers = seed::customers();
        let filter = CustomerFilter {
            term: "export",
            origin: Some(CustomerOrigin::Local),
        };
        assert!(filter_customers(&customers, &filter).is_empty());
    }

    #[test]
    fn facet_alone_narrows_by_origin() {
        let customers = seed::customers();
        let locals = filter_customers(
            &customers,
            &CustomerFilter {
                term: "",
                origin: Some(CustomerOrigin::Local),
            },
        );
        assert_eq!(locals.len(), 2);
        assert!(locals.iter().all(|c| c.origin == CustomerOrigin::Local));
    }

    #[test]
    fn search_covers_the_contact_person() {
        let customers = seed::customers();
        let hits = filter_customers(
            &customers,
            &CustomerFilter {
                term: "maría",
                origin: None,
            },
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "CLI-002");
    }

    #[test]
    fn stats_count_by_origin() {
        let stats = CustomerStats::compute(&seed::customers());
        assert_eq!(
            stats,
            CustomerStats {
                total: 3,
                local: 2,
                foreign: 1
            }
        );
    }

    #[test]
    fn stats_on_empty_collection_are_zero() {
        let stats = CustomerStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.local + stats.foreign, 0);
    }
}
