//! `mayanfruit-purchasing` — orders placed with suppliers.

pub mod order;

pub use order::{LineItem, PurchaseOrder, PurchaseOrderPatch, PurchaseOrderStatus};
