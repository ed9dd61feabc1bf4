//! `mayanfruit-products` — own produce and required farm supplies.

pub mod fruit;
pub mod supply;

pub use fruit::{FruitFinish, FruitGrade, FruitItem, FruitItemPatch};
pub use supply::{RequiredSupply, RequiredSupplyPatch, SupplyCategory};
