//! Sales page: status facet plus free-text search over id and customer.

use mayanfruit_sales::{SalesOrder, SalesOrderStatus};

use crate::filter::{facet_matches, text_matches};

/// UI state of the sales orders page.
#[derive(Debug, Clone, Default)]
pub struct SalesFilter<'a> {
    pub term: &'a str,
    pub status: Option<SalesOrderStatus>,
}

impl SalesFilter<'_> {
    pub fn matches(&self, order: &SalesOrder) -> bool {
        facet_matches(self.status, order.status)
            && text_matches(self.term, &[order.id.as_str(), &order.customer_name])
    }
}

pub fn filter_sales_orders<'a>(
    orders: &'a [SalesOrder],
    filter: &SalesFilter<'_>,
) -> Vec<&'a SalesOrder> {
    orders.iter().filter(|o| filter.matches(o)).collect()
}

/// Header cards of the sales page. Counts run over the full collection,
/// not the filtered subset, matching how the page renders them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesStats {
    pub total: usize,
    pub pending: usize,
    pub shipped: usize,
    pub delivered: usize,
    pub total_amount: f64,
}

impl SalesStats {
    pub fn compute(orders: &[SalesOrder]) -> Self {
        let count = |status| orders.iter().filter(|o| o.status == status).count();
        Self {
            total: orders.len(),
            pending: count(SalesOrderStatus::Pending),
            shipped: count(SalesOrderStatus::Shipped),
            delivered: count(SalesOrderStatus::Delivered),
            total_amount: orders.iter().map(|o| o.total).sum(),
        }
    }
}
