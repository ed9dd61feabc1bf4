//! `mayanfruit-parties` — the people the business trades with.

pub mod customer;
pub mod supplier;

pub use customer::{Customer, CustomerOrigin, CustomerPatch};
pub use supplier::{Supplier, SupplierPatch};
