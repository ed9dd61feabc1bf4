//! `mayanfruit-inventory` — warehouse movement log.

pub mod movement;

pub use movement::{InventoryMovement, InventoryMovementPatch, MovementDirection, StockCategory};
