use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mayanfruit_core::{DomainError, DomainResult, Record, RecordId};

/// Sales order status lifecycle.
///
/// `Pending → Preparing → Shipped → Delivered`, with `Cancelled` reachable
/// from any non-terminal state. `Delivered` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesOrderStatus {
    Pending,
    Preparing,
    Shipped,
    Delivered,
    Cancelled,
}

impl SalesOrderStatus {
    /// Explicit transition table. Staying in place is not a transition.
    pub fn can_transition_to(self, next: SalesOrderStatus) -> bool {
        use SalesOrderStatus::*;
        matches!(
            (self, next),
            (Pending, Preparing)
                | (Preparing, Shipped)
                | (Shipped, Delivered)
                | (Pending, Cancelled)
                | (Preparing, Cancelled)
                | (Shipped, Cancelled)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SalesOrderStatus::Delivered | SalesOrderStatus::Cancelled)
    }
}

/// One line of an order: a product reference with quantity and price.
///
/// `subtotal` (and the order `total`) are caller-computed; nothing in the
/// data layer derives or re-checks them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: RecordId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

impl OrderLine {
    /// Caller-side convenience that fills in `subtotal = quantity × unit_price`.
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

/// An order placed by a customer.
///
/// `customer_name` is a denormalized copy of the customer's name, kept for
/// display; it is never re-synchronized when the customer record changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: RecordId,
    pub customer_id: RecordId,
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
    pub total: f64,
    pub status: SalesOrderStatus,
    pub ordered_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_on: Option<NaiveDate>,
    pub discount_pct: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SalesOrder {
    /// Move the order to `next`, enforcing the transition table.
    pub fn transition_to(&mut self, next: SalesOrderStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::invariant(format!(
                "illegal sales order transition {:?} -> {:?}",
                self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }
}

/// Partial update for [`SalesOrder`].
///
/// `status` is deliberately absent: status changes go through
/// [`SalesOrder::transition_to`] so the transition table cannot be bypassed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesOrderPatch {
    pub customer_id: Option<RecordId>,
    pub customer_name: Option<String>,
    pub lines: Option<Vec<OrderLine>>,
    pub total: Option<f64>,
    pub ordered_on: Option<NaiveDate>,
    pub delivered_on: Option<Option<NaiveDate>>,
    pub discount_pct: Option<f64>,
    pub notes: Option<Option<String>>,
}

impl Record for SalesOrder {
    type Patch = SalesOrderPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(customer_id) = patch.customer_id {
            self.customer_id = customer_id;
        }
        if let Some(customer_name) = patch.customer_name {
            self.customer_name = customer_name;
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
        if let Some(delivered_on) = patch.delivered_on {
            self.delivered_on = delivered_on;
        }
        if let Some(discount_pct) = patch.discount_pct {
            self.discount_pct = discount_pct;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}
