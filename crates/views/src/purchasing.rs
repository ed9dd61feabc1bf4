//! Purchases page: status facet plus free-text search over id and supplier.

use mayanfruit_purchasing::{PurchaseOrder, PurchaseOrderStatus};

use crate::filter::{facet_matches, text_matches};

/// UI state of the purchase orders page.
#[derive(Debug, Clone, Default)]
pub struct PurchaseFilter<'a> {
    pub term: &'a str,
    pub status: Option<PurchaseOrderStatus>,
}

impl PurchaseFilter<'_> {
    pub fn matches(&self, order: &PurchaseOrder) -> bool {
        facet_matches(self.status, order.status)
            && text_matches(self.term, &[order.id.as_str(), &order.supplier_name])
    }
}

pub fn filter_purchase_orders<'a>(
    orders: &'a [PurchaseOrder],
    filter: &PurchaseFilter<'_>,
) -> Vec<&'a PurchaseOrder> {
    orders.iter().filter(|o| filter.matches(o)).collect()
}

/// Header cards of the purchases page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub received: usize,
    pub total_amount: f64,
}

impl PurchaseStats {
    pub fn compute(orders: &[PurchaseOrder]) -> Self {
        let count = |status| orders.iter().filter(|o| o.status == status).count();
        Self {
            total: orders.len(),
            pending: count(PurchaseOrderStatus::Pending),
            confirmed: count(PurchaseOrderStatus::Confirmed),
            received: count(PurchaseOrderStatus::Received),
            total_amount: orders.iter().map(|o| o.total).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mayanfruit_core::RecordId;
    use mayanfruit_purchasing::LineItem;

    fn order(id: &str, supplier: &str, status: PurchaseOrderStatus, total: f64) -> PurchaseOrder {
        PurchaseOrder {
            id: RecordId::new(id),
            supplier_id: RecordId::new("PRV-001"),
            supplier_name: supplier.to_string(),
            lines: vec![LineItem::new("PRR-001", "Fertilizante Premium", 1, total)],
            total,
            status,
            ordered_on: NaiveDate::from_ymd_opt(2025, 1, 25).unwrap(),
            expected_delivery: None,
            actual_delivery: None,
            notes: None,
        }
    }

    fn fixture() -> Vec<PurchaseOrder> {
        vec![
            order("ORC-001", "Agro Solutions", PurchaseOrderStatus::Pending, 500.0),
            order("ORC-002", "EcoAgro", PurchaseOrderStatus::Confirmed, 277.5),
            order("ORC-003", "Agro Solutions", PurchaseOrderStatus::Received, 125.0),
        ]
    }

    #[test]
    fn supplier_search_and_status_facet_are_anded() {
        let orders = fixture();
        let hits = filter_purchase_orders(
            &orders,
            &PurchaseFilter {
                term: "agro solutions",
                status: Some(PurchaseOrderStatus::Pending),
            },
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "ORC-001");
    }

    #[test]
    fn facet_order_does_not_matter() {
        // AND of facet and search is commutative: filtering by facet first
        // or search first selects the same ids.
        let orders = fixture();
        let by_facet: Vec<_> = orders
            .iter()
            .filter(|o| o.status == PurchaseOrderStatus::Received)
            .filter(|o| o.supplier_name.to_lowercase().contains("agro"))
            .map(|o| o.id.clone())
            .collect();
        let by_search: Vec<_> = orders
            .iter()
            .filter(|o| o.supplier_name.to_lowercase().contains("agro"))
            .filter(|o| o.status == PurchaseOrderStatus::Received)
            .map(|o| o.id.clone())
            .collect();
        assert_eq!(by_facet, by_search);
    }

    #[test]
    fn stats_count_per_status_and_sum_totals() {
        let stats = PurchaseStats::compute(&fixture());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.confirmed, 1);
        assert_eq!(stats.received, 1);
        assert_eq!(stats.total_amount, 902.5);
    }
}
