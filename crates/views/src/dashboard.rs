//! Dashboard page: headline metrics over the live collections.

use mayanfruit_inventory::InventoryMovement;
use mayanfruit_products::FruitItem;
use mayanfruit_sales::{SalesOrder, SalesOrderStatus};

use crate::inventory::net_inventory_change;

/// Headline metric cards on the landing page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardMetrics {
    /// Units of own produce currently in stock.
    pub products_in_stock: u64,
    /// Revenue across all sales orders.
    pub revenue: f64,
    /// Sales orders still pending.
    pub pending_orders: usize,
    /// Net inventory change over the movement log.
    pub net_change: i64,
}

impl DashboardMetrics {
    pub fn compute(
        fruit: &[FruitItem],
        sales: &[SalesOrder],
        movements: &[InventoryMovement],
    ) -> Self {
        Self {
            products_in_stock: fruit.iter().map(|f| u64::from(f.quantity)).sum(),
            revenue: sales.iter().map(|o| o.total).sum(),
            pending_orders: sales
                .iter()
                .filter(|o| o.status == SalesOrderStatus::Pending)
                .count(),
            net_change: net_inventory_change(movements),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mayanfruit_store::seed;

    #[test]
    fn metrics_over_seed_data() {
        let metrics = DashboardMetrics::compute(&seed::fruit(), &seed::sales_orders(), &[]);
        assert_eq!(metrics.products_in_stock, 500 + 300 + 200);
        assert_eq!(metrics.revenue, 3540.0);
        assert_eq!(metrics.pending_orders, 0);
        assert_eq!(metrics.net_change, 0);
    }

    #[test]
    fn metrics_over_empty_store_are_zero() {
        let metrics = DashboardMetrics::compute(&[], &[], &[]);
        assert_eq!(metrics.products_in_stock, 0);
        assert_eq!(metrics.revenue, 0.0);
        assert_eq!(metrics.pending_orders, 0);
        assert_eq!(metrics.net_change, 0);
    }
}
