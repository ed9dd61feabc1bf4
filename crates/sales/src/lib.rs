//! `mayanfruit-sales` — customer orders and their status lifecycle.

pub mod order;

pub use order::{OrderLine, SalesOrder, SalesOrderPatch, SalesOrderStatus};
