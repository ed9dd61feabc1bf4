//! The `Record` trait: the contract every stored entity fulfils.

use crate::id::RecordId;

/// A record that can live in a store collection.
///
/// Every entity carries its identifier inline and knows how to shallow-merge
/// a partial patch of itself. Patches follow the "`Some` overwrites, `None`
/// keeps" rule; fields that are themselves optional on the entity use a
/// nested `Option` in the patch so a patch can explicitly clear them.
pub trait Record: Clone {
    /// Companion patch type: one `Option` per mutable field, id excluded.
    type Patch;

    fn id(&self) -> &RecordId;

    /// Shallow-merge `patch` into `self`. Untouched fields keep their value.
    fn apply_patch(&mut self, patch: Self::Patch);
}
