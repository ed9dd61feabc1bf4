use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mayanfruit_core::{Record, RecordId};

/// Customer origin: local market or foreign export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerOrigin {
    Local,
    Foreign,
}

/// A buying customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
    pub origin: CustomerOrigin,
    /// Contact person, not the legal name.
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub available_credit: f64,
    pub active: bool,
    pub registered_on: NaiveDate,
}

/// Partial update for [`Customer`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub origin: Option<CustomerOrigin>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<Option<String>>,
    pub available_credit: Option<f64>,
    pub active: Option<bool>,
    pub registered_on: Option<NaiveDate>,
}

impl Record for Customer {
    type Patch = CustomerPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(origin) = patch.origin {
            self.origin = origin;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
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
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(available_credit) = patch.available_credit {
            self.available_credit = available_credit;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        if let Some(registered_on) = patch.registered_on {
            self.registered_on = registered_on;
        }
    }
}
