use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mayanfruit_core::{Record, RecordId};

/// Category of a purchased farm supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyCategory {
    Fertilizer,
    Compost,
    Hoe,
    Chemical,
    PackingBox,
    Lid,
    Nylon,
}

/// A supply the farm needs to buy in (fertilizer, packing material, tools).
///
/// `supplier_name` is free text, not a reference into the suppliers
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredSupply {
    pub id: RecordId,
    pub name: String,
    pub category: SupplyCategory,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    pub quantity: u32,
    pub supplier_name: String,
    pub registered_on: NaiveDate,
}

/// Partial update for [`RequiredSupply`].
///
/// Optional entity fields are double-wrapped: `Some(None)` clears the value,
/// `Some(Some(v))` replaces it, `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequiredSupplyPatch {
    pub name: Option<String>,
    pub category: Option<SupplyCategory>,
    pub price: Option<f64>,
    pub expires_on: Option<Option<NaiveDate>>,
    pub size: Option<Option<String>>,
    pub specialty: Option<Option<String>>,
    pub quantity: Option<u32>,
    pub supplier_name: Option<String>,
    pub registered_on: Option<NaiveDate>,
}

impl Record for RequiredSupply {
    type Patch = RequiredSupplyPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(expires_on) = patch.expires_on {
            self.expires_on = expires_on;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(specialty) = patch.specialty {
            self.specialty = specialty;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(supplier_name) = patch.supplier_name {
            self.supplier_name = supplier_name;
        }
        if let Some(registered_on) = patch.registered_on {
            self.registered_on = registered_on;
        }
    }
}
