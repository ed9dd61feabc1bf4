use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mayanfruit_core::{Record, RecordId};

/// Which side of the catalog the moved product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockCategory {
    Fruit,
    Supply,
}

/// Direction of a warehouse movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementDirection {
    Inbound,
    Outbound,
}

/// One entry of the warehouse movement log.
///
/// `product_name` is a denormalized display copy. Nothing checks that
/// `quantity_after - quantity_before` agrees in sign with `direction`;
/// contradictory rows are stored as given (see [`InventoryMovement::signed_delta`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryMovement {
    pub id: RecordId,
    pub product_id: RecordId,
    pub product_name: String,
    pub category: StockCategory,
    pub quantity_before: i64,
    pub quantity_after: i64,
    pub direction: MovementDirection,
    /// Reference document (order id, adjustment slip, ...).
    pub reference: String,
    pub warehouse: String,
    /// Storage temperature in °C, for cold-chain produce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    pub moved_on: NaiveDate,
}

impl InventoryMovement {
    /// Contribution of this movement to the net inventory change:
    /// `after - before` for inbound movements, the negation for outbound.
    ///
    /// The formula trusts `direction`; a row whose before/after difference
    /// contradicts its direction yields the formula's value unchanged.
    pub fn signed_delta(&self) -> i64 {
        let diff = self.quantity_after - self.quantity_before;
        match self.direction {
            MovementDirection::Inbound => diff,
            MovementDirection::Outbound => -diff,
        }
    }

    /// Absolute number of units this movement touched.
    pub fn units_moved(&self) -> i64 {
        (self.quantity_after - self.quantity_before).abs()
    }
}

/// Partial update for [`InventoryMovement`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryMovementPatch {
    pub product_id: Option<RecordId>,
    pub product_name: Option<String>,
    pub category: Option<StockCategory>,
    pub quantity_before: Option<i64>,
    pub quantity_after: Option<i64>,
    pub direction: Option<MovementDirection>,
    pub reference: Option<String>,
    pub warehouse: Option<String>,
    pub temperature: Option<Option<f64>>,
    pub moved_on: Option<NaiveDate>,
}

impl Record for InventoryMovement {
    type Patch = InventoryMovementPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(product_id) = patch.product_id {
            self.product_id = product_id;
        }
        if let Some(product_name) = patch.product_name {
            self.product_name = product_name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(quantity_before) = patch.quantity_before {
            self.quantity_before = quantity_before;
        }
        if let Some(quantity_after) = patch.quantity_after {
            self.quantity_after = quantity_after;
        }
        if let Some(direction) = patch.direction {
            self.direction = direction;
        }
        if let Some(reference) = patch.reference {
            self.reference = reference;
        }
        if let Some(warehouse) = patch.warehouse {
            self.warehouse = warehouse;
        }
        if let Some(temperature) = patch.temperature {
            self.temperature = temperature;
        }
        if let Some(moved_on) = patch.moved_on {
            self.moved_on = moved_on;
        }
    }
}
