//! A single named collection of records, in insertion order.

use mayanfruit_core::{Record, RecordId};

/// Ordered, in-memory collection of one record type.
///
/// Mirrors the semantics every page expects:
/// - `add` appends unconditionally (no uniqueness check);
/// - `update` patches the first record with a matching id and reports
///   whether anything matched (missing id is a documented no-op);
/// - `remove` drops every record with the id (idempotent).
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Borrow the full collection in insertion order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Cloned snapshot, for page-mount reads that must not alias the store.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &RecordId) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Append unconditionally. The caller supplies the full record including
    /// its id; no uniqueness or required-field checks are performed.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Shallow-merge `patch` into the first record with `id`. Returns `false`
    /// when no record matched (no-op, not an error).
    pub fn update(&mut self, id: &RecordId, patch: T::Patch) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.apply_patch(patch);
                true
            }
            None => false,
        }
    }

    /// Remove every record with `id` (filter semantics, not first-match).
    /// Returns the number of records removed; zero on a missing id.
    pub fn remove(&mut self, id: &RecordId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        before - self.items.len()
    }

    /// Replace the whole collection (snapshot import path).
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mayanfruit_parties::{Customer, CustomerOrigin, CustomerPatch};
    use mayanfruit_core::RecordId;

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: RecordId::new(id),
            name: name.to_string(),
            origin: CustomerOrigin::Local,
            contact: "Juan García".to_string(),
            email: "juan@example.com".to_string(),
            phone: "+502 7812-3456".to_string(),
            address: "Ciudad de Guatemala".to_string(),
            company: None,
            available_credit: 10_000.0,
            active: true,
            registered_on: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut col = Collection::new();
        col.add(customer("CLI-002", "Export Global"));
        col.add(customer("CLI-001", "Distribuidora Central"));
        let ids: Vec<_> = col.iter().map(|c| c.id.as_str().to_owned()).collect();
        assert_eq!(ids, ["CLI-002", "CLI-001"]);
    }

    #[test]
    fn add_does_not_check_id_uniqueness() {
        let mut col = Collection::new();
        col.add(customer("CLI-001", "a"));
        col.add(customer("CLI-001", "b"));
        assert_eq!(col.len(), 2);
    }

    #[test]
    fn update_missing_id_is_a_noop() {
        let mut col = Collection::new();
        col.add(customer("CLI-001", "Distribuidora Central"));
        let before = col.to_vec();

        let matched = col.update(
            &RecordId::new("CLI-999"),
            CustomerPatch {
                name: Some("ghost".to_string()),
                ..Default::default()
            },
        );

        assert!(!matched);
        assert_eq!(col.to_vec(), before);
    }

    #[test]
    fn update_patches_first_match_only() {
        let mut col = Collection::new();
        col.add(customer("CLI-001", "first"));
        col.add(customer("CLI-001", "second"));

        col.update(
            &RecordId::new("CLI-001"),
            CustomerPatch {
                name: Some("patched".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(col.all()[0].name, "patched");
        assert_eq!(col.all()[1].name, "second");
    }

    #[test]
    fn remove_drops_every_match_and_is_idempotent() {
        let mut col = Collection::new();
        col.add(customer("CLI-001", "a"));
        col.add(customer("CLI-002", "b"));
        col.add(customer("CLI-001", "c"));

        assert_eq!(col.remove(&RecordId::new("CLI-001")), 2);
        let after_first = col.to_vec();

        assert_eq!(col.remove(&RecordId::new("CLI-001")), 0);
        assert_eq!(col.to_vec(), after_first);
        assert_eq!(col.len(), 1);
    }
}
