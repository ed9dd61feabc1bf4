//! Inventory page: category and direction facets, search over product and
//! warehouse, and the net-change aggregation.

use mayanfruit_inventory::{InventoryMovement, MovementDirection, StockCategory};

use crate::filter::{facet_matches, text_matches};

/// UI state of the inventory page. Two independent facets.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilter<'a> {
    pub term: &'a str,
    pub category: Option<StockCategory>,
    pub direction: Option<MovementDirection>,
}

impl InventoryFilter<'_> {
    pub fn matches(&self, movement: &InventoryMovement) -> bool {
        facet_matches(self.category, movement.category)
            && facet_matches(self.direction, movement.direction)
            && text_matches(
                self.term,
                &[
                    &movement.product_name,
                    movement.product_id.as_str(),
                    &movement.warehouse,
                ],
            )
    }
}

pub fn filter_movements<'a>(
    movements: &'a [InventoryMovement],
    filter: &InventoryFilter<'_>,
) -> Vec<&'a InventoryMovement> {
    movements.iter().filter(|m| filter.matches(m)).collect()
}

/// Header cards of the inventory page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryStats {
    pub movements: usize,
    pub inbound: usize,
    pub outbound: usize,
    /// Total units touched, direction ignored.
    pub units_moved: i64,
}

impl InventoryStats {
    pub fn compute(movements: &[InventoryMovement]) -> Self {
        Self {
            movements: movements.len(),
            inbound: movements
                .iter()
                .filter(|m| m.direction == MovementDirection::Inbound)
                .count(),
            outbound: movements
                .iter()
                .filter(|m| m.direction == MovementDirection::Outbound)
                .count(),
            units_moved: movements.iter().map(|m| m.units_moved()).sum(),
        }
    }
}

/// Net inventory change over a set of movements: the sum of each movement's
/// direction-signed delta (see [`InventoryMovement::signed_delta`]). Rows
/// whose direction contradicts their before/after values contribute the
/// formula's value as-is.
pub fn net_inventory_change(movements: &[InventoryMovement]) -> i64 {
    movements.iter().map(|m| m.signed_delta()).sum()
}
