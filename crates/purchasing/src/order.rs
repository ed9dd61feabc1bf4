use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mayanfruit_core::{DomainError, DomainResult, Record, RecordId};

/// Purchase order status lifecycle.
///
/// `Pending → Confirmed → Received`, with `Cancelled` reachable from any
/// non-terminal state. `Received` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseOrderStatus {
    Pending,
    Confirmed,
    Received,
    Cancelled,
}

impl PurchaseOrderStatus {
    /// Explicit transition table. Staying in place is not a transition.
    pub fn can_transition_to(self, next: PurchaseOrderStatus) -> bool {
        use PurchaseOrderStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Confirmed, Received)
                | (Pending, Cancelled)
                | (Confirmed, Cancelled)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PurchaseOrderStatus::Received | PurchaseOrderStatus::Cancelled
        )
    }
}

/// One line of a purchase order. Same shape as a sales order line;
/// `subtotal` and the order `total` are caller-computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: RecordId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

impl LineItem {
    pub fn new(
        product_id: impl Into<RecordId>,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: f64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            unit_price,
            subtotal: f64::from(quantity) * unit_price,
        }
    }
}

/// An order placed with a supplier.
///
/// `supplier_name` is a denormalized copy kept for display, never
/// re-synchronized with the suppliers collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: RecordId,
    pub supplier_id: RecordId,
    pub supplier_name: String,
    pub lines: Vec<LineItem>,
    pub total: f64,
    pub status: PurchaseOrderStatus,
    pub ordered_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_delivery: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PurchaseOrder {
    /// Move the order to `next`, enforcing the transition table.
    pub fn transition_to(&mut self, next: PurchaseOrderStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::invariant(format!(
                "illegal purchase order transition {:?} -> {:?}",
                self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }
}

/// Partial update for [`PurchaseOrder`]. `status` is deliberately absent;
/// see [`PurchaseOrder::transition_to`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseOrderPatch {
    pub supplier_id: Option<RecordId>,
    pub supplier_name: Option<String>,
    pub lines: Option<Vec<LineItem>>,
    pub total: Option<f64>,
    pub ordered_on: Option<NaiveDate>,
    pub expected_delivery: Option<Option<NaiveDate>>,
    pub actual_delivery: Option<Option<NaiveDate>>,
    pub notes: Option<Option<String>>,
}

impl Record for PurchaseOrder {
    type Patch = PurchaseOrderPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(supplier_id) = patch.supplier_id {
            self.supplier_id = supplier_id;
        }
        if let Some(supplier_name) = patch.supplier_name {
            self.supplier_name = supplier_name;
        }
        if let Some(lines) = patch.lines {
            self.lines = lines;
        }
        if let Some(total) = patch.total {
            self.total = total;
        }
        if let Some(ordered_on) = patch.ordered_on {
            self.ordered_on = ordered_on;
        }
        if let Some(expected_delivery) = patch.expected_delivery {
            self.expected_delivery = expected_delivery;
        }
        if let Some(actual_delivery) = patch.actual_delivery {
            self.actual_delivery = actual_delivery;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}
