use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mayanfruit_core::{Record, RecordId};

/// Fruit grade: the two quality tiers the business trades in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FruitGrade {
    Medium,
    High,
}

/// Surface finish of the fruit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FruitFinish {
    Matte,
    Glossy,
}

/// Own-produce catalog entry. Leaf entity, no references out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitItem {
    pub id: RecordId,
    pub name: String,
    pub grade: FruitGrade,
    /// Weight per unit of sale, in pounds.
    pub weight: f64,
    pub color: String,
    pub finish: FruitFinish,
    pub unit_price: f64,
    pub quantity: u32,
    pub registered_on: NaiveDate,
}

/// Partial update for [`FruitItem`]: `Some` overwrites, `None` keeps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FruitItemPatch {
    pub name: Option<String>,
    pub grade: Option<FruitGrade>,
    pub weight: Option<f64>,
    pub color: Option<String>,
    pub finish: Option<FruitFinish>,
    pub unit_price: Option<f64>,
    pub quantity: Option<u32>,
    pub registered_on: Option<NaiveDate>,
}

impl Record for FruitItem {
    type Patch = FruitItemPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(grade) = patch.grade {
            self.grade = grade;
        }
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(finish) = patch.finish {
            self.finish = finish;
        }
        if let Some(unit_price) = patch.unit_price {
            self.unit_price = unit_price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(registered_on) = patch.registered_on {
            self.registered_on = registered_on;
        }
    }
}
