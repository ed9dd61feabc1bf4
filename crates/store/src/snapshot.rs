//! Bulk export/import document.
//!
//! The wire shape keeps the Spanish top-level keys (`frutas`,
//! `productosRequeridos`, ...) so previously exported backups stay
//! importable. Every field is optional on import: absent collections are
//! left untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use mayanfruit_inventory::InventoryMovement;
use mayanfruit_parties::{Customer, Supplier};
use mayanfruit_products::{FruitItem, RequiredSupply};
use mayanfruit_purchasing::PurchaseOrder;
use mayanfruit_sales::SalesOrder;

/// Import failure. Returned to the caller instead of being logged and
/// swallowed; the store is guaranteed untouched when this is produced.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The payload is not parseable as the snapshot document.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One structured document with one optional field per collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frutas: Option<Vec<FruitItem>>,
    #[serde(default, rename = "productosRequeridos", skip_serializing_if = "Option::is_none")]
    pub productos_requeridos: Option<Vec<RequiredSupply>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clientes: Option<Vec<Customer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proveedores: Option<Vec<Supplier>>,
    #[serde(default, rename = "ordenesVenta", skip_serializing_if = "Option::is_none")]
    pub ordenes_venta: Option<Vec<SalesOrder>>,
    #[serde(default, rename = "ordenesCompra", skip_serializing_if = "Option::is_none")]
    pub ordenes_compra: Option<Vec<PurchaseOrder>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventario: Option<Vec<InventoryMovement>>,
}

impl Snapshot {
    /// Parse a snapshot document. The whole document is validated before
    /// anything is applied, so a malformed payload can never leave the
    /// store partially mutated.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_parses_to_all_absent() {
        let snap = Snapshot::from_json("{}").unwrap();
        assert_eq!(snap, Snapshot::default());
    }

    #[test]
    fn unknown_top_level_fields_are_rejected() {
        let err = Snapshot::from_json(r#"{"bananas": []}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed(_)));
    }

    #[test]
    fn unparseable_payload_is_a_typed_error() {
        assert!(matches!(
            Snapshot::from_json("not json at all"),
            Err(SnapshotError::Malformed(_))
        ));
        assert!(matches!(
            Snapshot::from_json(r#"{"frutas": "not an array"}"#),
            Err(SnapshotError::Malformed(_))
        ));
    }

    #[test]
    fn partial_document_keeps_other_fields_absent() {
        let snap = Snapshot::from_json(r#"{"clientes": []}"#).unwrap();
        assert_eq!(snap.clientes.as_deref(), Some(&[][..]));
        assert!(snap.frutas.is_none());
        assert!(snap.ordenes_venta.is_none());
    }

    #[test]
    fn spanish_top_level_keys_round_trip() {
        let snap = Snapshot {
            productos_requeridos: Some(vec![]),
            ordenes_venta: Some(vec![]),
            ..Default::default()
        };
        let json = snap.to_json().unwrap();
        assert!(json.contains("\"productosRequeridos\""));
        assert!(json.contains("\"ordenesVenta\""));
        assert!(!json.contains("\"frutas\""));
    }
}
