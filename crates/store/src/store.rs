//! The store facade: seven collections, one owner.

use tracing::{debug, warn};

use mayanfruit_core::{DomainError, DomainResult, Record, RecordId};
use mayanfruit_inventory::InventoryMovement;
use mayanfruit_parties::{Customer, Supplier};
use mayanfruit_products::{FruitItem, RequiredSupply};
use mayanfruit_purchasing::{PurchaseOrder, PurchaseOrderStatus};
use mayanfruit_sales::{SalesOrder, SalesOrderStatus};

use crate::collection::Collection;
use crate::notify::{ChangeBus, ChangeKind, CollectionKind, StoreChange, Subscription};
use crate::seed;
use crate::snapshot::{Snapshot, SnapshotError};

/// Single source of truth for all seven collections.
///
/// Explicitly constructed and passed by the embedding process — there is no
/// global instance. Dropping the store is the teardown. Mutations through
/// the named methods announce themselves on the change bus; the `*_mut()`
/// accessors bypass notification (bulk test setup escape hatch).
#[derive(Debug, Default)]
pub struct DataStore {
    fruit: Collection<FruitItem>,
    supplies: Collection<RequiredSupply>,
    customers: Collection<Customer>,
    suppliers: Collection<Supplier>,
    sales_orders: Collection<SalesOrder>,
    purchase_orders: Collection<PurchaseOrder>,
    movements: Collection<InventoryMovement>,
    bus: ChangeBus,
}

macro_rules! collection_api {
    (
        $field:ident, $kind:expr, $ty:ty;
        $all:ident, $mut_:ident, $add:ident, $update:ident, $remove:ident
    ) => {
        pub fn $all(&self) -> &Collection<$ty> {
            &self.$field
        }

        /// Direct mutable access. Does not publish change notifications.
        pub fn $mut_(&mut self) -> &mut Collection<$ty> {
            &mut self.$field
        }

        pub fn $add(&mut self, item: $ty) {
            debug!(collection = ?$kind, id = %Record::id(&item), "add");
            self.$field.add(item);
            self.publish($kind, ChangeKind::Added);
        }

        /// Returns `false` when the id matched nothing (documented no-op).
        pub fn $update(&mut self, id: &RecordId, patch: <$ty as Record>::Patch) -> bool {
            let matched = self.$field.update(id, patch);
            debug!(collection = ?$kind, %id, matched, "update");
            if matched {
                self.publish($kind, ChangeKind::Updated);
            }
            matched
        }

        /// Removes every record with `id`; returns the removed count.
        pub fn $remove(&mut self, id: &RecordId) -> usize {
            let removed = self.$field.remove(id);
            debug!(collection = ?$kind, %id, removed, "remove");
            if removed > 0 {
                self.publish($kind, ChangeKind::Removed);
            }
            removed
        }
    };
}

impl DataStore {
    /// An empty store, every collection blank.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the fixed sample rows (see [`crate::seed`]).
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.fruit.replace_all(seed::fruit());
        store.supplies.replace_all(seed::supplies());
        store.customers.replace_all(seed::customers());
        store.suppliers.replace_all(seed::suppliers());
        store.sales_orders.replace_all(seed::sales_orders());
        store
    }

    /// Subscribe to change announcements for all collections.
    pub fn subscribe(&self) -> Subscription {
        self.bus.subscribe()
    }

    fn publish(&self, collection: CollectionKind, kind: ChangeKind) {
        self.bus.publish(StoreChange { collection, kind });
    }

    collection_api!(fruit, CollectionKind::Fruit, FruitItem;
        fruit, fruit_mut, add_fruit, update_fruit, remove_fruit);
    collection_api!(supplies, CollectionKind::Supplies, RequiredSupply;
        supplies, supplies_mut, add_supply, update_supply, remove_supply);
    collection_api!(customers, CollectionKind::Customers, Customer;
        customers, customers_mut, add_customer, update_customer, remove_customer);
    collection_api!(suppliers, CollectionKind::Suppliers, Supplier;
        suppliers, suppliers_mut, add_supplier, update_supplier, remove_supplier);
    collection_api!(sales_orders, CollectionKind::SalesOrders, SalesOrder;
        sales_orders, sales_orders_mut, add_sales_order, update_sales_order, remove_sales_order);
    collection_api!(purchase_orders, CollectionKind::PurchaseOrders, PurchaseOrder;
        purchase_orders, purchase_orders_mut, add_purchase_order, update_purchase_order,
        remove_purchase_order);
    collection_api!(movements, CollectionKind::Movements, InventoryMovement;
        movements, movements_mut, add_movement, update_movement, remove_movement);

    /// Move a sales order through its status machine. Illegal transitions
    /// are rejected; an unknown id is `DomainError::NotFound`.
    pub fn set_sales_order_status(
        &mut self,
        id: &RecordId,
        next: SalesOrderStatus,
    ) -> DomainResult<()> {
        let order = self
            .sales_orders
            .get_mut(id)
            .ok_or(DomainError::NotFound)?;
        order.transition_to(next)?;
        debug!(%id, status = ?next, "sales order transition");
        self.publish(CollectionKind::SalesOrders, ChangeKind::Updated);
        Ok(())
    }

    /// Move a purchase order through its status machine.
    pub fn set_purchase_order_status(
        &mut self,
        id: &RecordId,
        next: PurchaseOrderStatus,
    ) -> DomainResult<()> {
        let order = self
            .purchase_orders
            .get_mut(id)
            .ok_or(DomainError::NotFound)?;
        order.transition_to(next)?;
        debug!(%id, status = ?next, "purchase order transition");
        self.publish(CollectionKind::PurchaseOrders, ChangeKind::Updated);
        Ok(())
    }

    /// Serialize all seven collections into one snapshot document.
    pub fn export_json(&self) -> Result<String, SnapshotError> {
        let snapshot = Snapshot {
            frutas: Some(self.fruit.to_vec()),
            productos_requeridos: Some(self.supplies.to_vec()),
            clientes: Some(self.customers.to_vec()),
            proveedores: Some(self.suppliers.to_vec()),
            ordenes_venta: Some(self.sales_orders.to_vec()),
            ordenes_compra: Some(self.purchase_orders.to_vec()),
            inventario: Some(self.movements.to_vec()),
        };
        snapshot.to_json()
    }

    /// Replace collections from a snapshot document.
    ///
    /// Fields present in the document fully replace their collection; absent
    /// fields leave theirs untouched. The document is parsed in full before
    /// any collection is touched, so a malformed payload mutates nothing.
    pub fn import_json(&mut self, json: &str) -> Result<(), SnapshotError> {
        let snapshot = match Snapshot::from_json(json) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "snapshot import rejected");
                return Err(err);
            }
        };
        self.apply_snapshot(snapshot);
        Ok(())
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        macro_rules! replace {
            ($source:expr, $field:ident, $kind:expr) => {
                if let Some(items) = $source {
                    debug!(collection = ?$kind, count = items.len(), "import replace");
                    self.$field.replace_all(items);
                    self.publish($kind, ChangeKind::Replaced);
                }
            };
        }

        replace!(snapshot.frutas, fruit, CollectionKind::Fruit);
        replace!(snapshot.productos_requeridos, supplies, CollectionKind::Supplies);
        replace!(snapshot.clientes, customers, CollectionKind::Customers);
        replace!(snapshot.proveedores, suppliers, CollectionKind::Suppliers);
        replace!(snapshot.ordenes_venta, sales_orders, CollectionKind::SalesOrders);
        replace!(snapshot.ordenes_compra, purchase_orders, CollectionKind::PurchaseOrders);
        replace!(snapshot.inventario, movements, CollectionKind::Movements);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mayanfruit_parties::CustomerPatch;

    #[test]
    fn seeded_store_matches_the_fixture() {
        let store = DataStore::seeded();
        assert_eq!(store.fruit().len(), 3);
        assert_eq!(store.supplies().len(), 3);
        assert_eq!(store.customers().len(), 3);
        assert_eq!(store.suppliers().len(), 2);
        assert_eq!(store.sales_orders().len(), 2);
        assert!(store.purchase_orders().is_empty());
        assert!(store.movements().is_empty());
    }

    #[test]
    fn facade_mutations_announce_themselves() {
        let mut store = DataStore::seeded();
        let sub = store.subscribe();

        store.update_customer(
            &RecordId::new("CLI-001"),
            CustomerPatch {
                active: Some(false),
                ..Default::default()
            },
        );
        store.remove_fruit(&RecordId::new("FRU-003"));

        let seen = sub.drain();
        assert_eq!(
            seen,
            vec![
                StoreChange {
                    collection: CollectionKind::Customers,
                    kind: ChangeKind::Updated
                },
                StoreChange {
                    collection: CollectionKind::Fruit,
                    kind: ChangeKind::Removed
                },
            ]
        );
    }

    #[test]
    fn noop_mutations_do_not_announce() {
        let mut store = DataStore::seeded();
        let sub = store.subscribe();

        assert!(!store.update_customer(&RecordId::new("CLI-999"), CustomerPatch::default()));
        assert_eq!(store.remove_fruit(&RecordId::new("FRU-999")), 0);

        assert!(sub.drain().is_empty());
    }

    #[test]
    fn mut_accessor_bypasses_notification() {
        let mut store = DataStore::new();
        let sub = store.subscribe();
        store.fruit_mut().replace_all(seed::fruit());
        assert!(sub.drain().is_empty());
        assert_eq!(store.fruit().len(), 3);
    }

    #[test]
    fn legal_status_transition_goes_through() {
        let mut store = DataStore::seeded();
        let id = RecordId::new("ORV-002"); // seeded as Shipped
        store
            .set_sales_order_status(&id, SalesOrderStatus::Delivered)
            .unwrap();
        assert_eq!(
            store.sales_orders().get(&id).unwrap().status,
            SalesOrderStatus::Delivered
        );
    }

    #[test]
    fn illegal_status_transition_is_rejected_and_state_kept() {
        let mut store = DataStore::seeded();
        let id = RecordId::new("ORV-001"); // seeded as Delivered (terminal)
        let err = store
            .set_sales_order_status(&id, SalesOrderStatus::Pending)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(
            store.sales_orders().get(&id).unwrap().status,
            SalesOrderStatus::Delivered
        );
    }

    #[test]
    fn status_transition_on_unknown_id_is_not_found() {
        let mut store = DataStore::seeded();
        let err = store
            .set_purchase_order_status(&RecordId::new("ORC-404"), PurchaseOrderStatus::Confirmed)
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }
}
