//! Accounting page: the financial summary derived from orders.

use mayanfruit_purchasing::PurchaseOrder;
use mayanfruit_sales::SalesOrder;

use crate::ratio::round1;

/// Guatemalan VAT rate applied to revenue.
pub const VAT_RATE: f64 = 0.12;

/// Financial summary cards: revenue from sales orders, expenses from
/// purchase orders, derived profit, VAT and margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialSummary {
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    /// VAT owed on revenue, at [`VAT_RATE`].
    pub vat: f64,
    /// Profit margin as a percentage of revenue, one decimal place.
    /// Defined as `0.0` when revenue is zero.
    pub margin_pct: f64,
}

impl FinancialSummary {
    pub fn compute(sales: &[SalesOrder], purchases: &[PurchaseOrder]) -> Self {
        let revenue: f64 = sales.iter().map(|o| o.total).sum();
        let expenses: f64 = purchases.iter().map(|o| o.total).sum();
        let profit = revenue - expenses;
        let margin_pct = if revenue == 0.0 {
            0.0
        } else {
            round1(profit / revenue * 100.0)
        };
        Self {
            revenue,
            expenses,
            profit,
            vat: revenue * VAT_RATE,
            margin_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mayanfruit_core::RecordId;
    use mayanfruit_purchasing::PurchaseOrderStatus;
    use mayanfruit_store::seed;

    fn purchase(total: f64) -> PurchaseOrder {
        PurchaseOrder {
            id: RecordId::new("ORC-001"),
            supplier_id: RecordId::new("PRV-001"),
            supplier_name: "Agro Solutions".to_string(),
            lines: vec![],
            total,
            status: PurchaseOrderStatus::Received,
            ordered_on: NaiveDate::from_ymd_opt(2025, 1, 25).unwrap(),
            expected_delivery: None,
            actual_delivery: None,
            notes: None,
        }
    }

    #[test]
    fn summary_over_seed_data() {
        let summary = FinancialSummary::compute(&seed::sales_orders(), &[]);
        assert_eq!(summary.revenue, 3540.0);
        assert_eq!(summary.expenses, 0.0);
        assert_eq!(summary.profit, 3540.0);
        assert_eq!(summary.vat, 3540.0 * 0.12);
        assert_eq!(summary.margin_pct, 100.0);
    }

    #[test]
    fn zero_revenue_margin_is_zero_not_nan() {
        let summary = FinancialSummary::compute(&[], &[purchase(500.0)]);
        assert_eq!(summary.revenue, 0.0);
        assert_eq!(summary.profit, -500.0);
        assert_eq!(summary.margin_pct, 0.0);
        assert!(summary.margin_pct.is_finite());
    }

    #[test]
    fn margin_is_rounded_to_one_decimal() {
        let mut sales = seed::sales_orders();
        sales.truncate(1); // revenue 790

        let summary = FinancialSummary::compute(&sales, &[purchase(500.0)]);
        // (790 - 500) / 790 * 100 = 36.708... → 36.7
        assert_eq!(summary.margin_pct, 36.7);
    }

    #[test]
    fn negative_margin_is_representable() {
        let sales = seed::sales_orders();
        let summary = FinancialSummary::compute(&sales, &[purchase(7080.0)]);
        assert!(summary.profit < 0.0);
        assert_eq!(summary.margin_pct, -100.0);
    }
}
