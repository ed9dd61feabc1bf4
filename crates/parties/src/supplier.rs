use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mayanfruit_core::{Record, RecordId};

/// A supplier of farm inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// What this supplier sells, as free text.
    pub product: String,
    /// Rating on a 0–5 scale.
    pub rating: f64,
    pub active: bool,
    pub registered_on: NaiveDate,
}

/// Partial update for [`Supplier`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub product: Option<String>,
    pub rating: Option<f64>,
    pub active: Option<bool>,
    pub registered_on: Option<NaiveDate>,
}

impl Record for Supplier {
    type Patch = SupplierPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(product) = patch.product {
            self.product = product;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        if let Some(registered_on) = patch.registered_on {
            self.registered_on = registered_on;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_patch_preserves_contact_details() {
        let mut supplier = Supplier {
            id: RecordId::new("PRV-001"),
            name: "Agro Solutions".to_string(),
            email: "sales@agrosolutions.com".to_string(),
            phone: "+502 2300-0001".to_string(),
            address: "Petén, Guatemala".to_string(),
            product: "Fertilizantes".to_string(),
            rating: 4.5,
            active: true,
            registered_on: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        let before = supplier.clone();

        supplier.apply_patch(SupplierPatch {
            rating: Some(3.0),
            ..Default::default()
        });

        assert_eq!(supplier.rating, 3.0);
        assert_eq!(supplier.email, before.email);
        assert_eq!(supplier.product, before.product);
    }
}
