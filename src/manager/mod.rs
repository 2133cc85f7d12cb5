//! # Entity Managers
//!
//! One manager per entity, each owning a single [`OrderedStore`]. The CRUD
//! surface is shared through the [`Manager`] trait; searches, sorts, extremes
//! and statistics live on the concrete managers.
//!
//! ## ID Matching
//!
//! IDs are matched case-insensitively. The store does not prevent duplicate
//! IDs, so `update` and `delete` act on *every* matching record while
//! `find_by_id` returns the first one in insertion order.
//!
//! ## Key Types
//!
//! - [`Manager`] - Shared CRUD operations
//! - [`Registry`] - The four managers loaded from one shop
//! - [`SortDirection`] - Ascending or descending sort

use std::cmp::Ordering;

use tracing::debug;

use crate::analytics::Analytics;
use crate::domain::{OrderedStore, Record};

/// Sort direction for `sort_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Applies the direction to an ascending ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// CRUD operations shared by every entity manager
pub trait Manager {
    type Record: Record;

    /// Returns the backing store
    fn store(&self) -> &OrderedStore<Self::Record>;

    /// Returns the backing store mutably
    fn store_mut(&mut self) -> &mut OrderedStore<Self::Record>;

    /// Appends a record
    fn add(&mut self, record: Self::Record) {
        debug!(kind = <Self::Record as Record>::KIND, id = record.id(), "add");
        self.store_mut().append(record);
    }

    /// Replaces every record whose ID matches `id` with `record`
    ///
    /// Does not check that `record` carries the same ID.
    fn update(&mut self, id: &str, record: Self::Record) -> bool {
        let updated = self
            .store_mut()
            .update_where(|existing| existing.has_id(id), |_| record.clone());
        debug!(kind = <Self::Record as Record>::KIND, id, updated, "update");
        updated
    }

    /// Removes every record whose ID matches `id`
    fn delete(&mut self, id: &str) -> bool {
        let removed = self.store_mut().remove_where(|existing| existing.has_id(id));
        debug!(kind = <Self::Record as Record>::KIND, id, removed, "delete");
        removed
    }

    /// Returns the first record whose ID matches `id`
    fn find_by_id(&self, id: &str) -> Option<&Self::Record> {
        self.store().find_first(|record| record.has_id(id))
    }

    /// Returns a copy of every record in insertion order
    fn get_all(&self) -> Vec<Self::Record> {
        self.store().to_snapshot()
    }

    /// Discards the current records and loads `records` in order
    fn replace_all(&mut self, records: Vec<Self::Record>) {
        debug!(kind = <Self::Record as Record>::KIND, count = records.len(), "replace_all");
        let store = self.store_mut();
        store.clear();
        store.bulk_append(records);
    }

    /// Number of records
    fn count(&self) -> usize {
        self.store().len()
    }

    fn is_empty(&self) -> bool {
        self.store().is_empty()
    }
}

/// Implements [`Manager`] for a manager wrapping one store field
macro_rules! impl_manager {
    ($manager:ty, $record:ty, $field:ident) => {
        impl $crate::manager::Manager for $manager {
            type Record = $record;

            fn store(&self) -> &$crate::domain::OrderedStore<$record> {
                &self.$field
            }

            fn store_mut(&mut self) -> &mut $crate::domain::OrderedStore<$record> {
                &mut self.$field
            }
        }
    };
}

mod phone;
mod invoice;
mod customer;
mod employee;

pub use phone::{PhoneManager, PhoneSortKey};
pub use invoice::{InvoiceManager, InvoiceSortKey};
pub use customer::{CustomerManager, CustomerSortKey};
pub use employee::{EmployeeManager, EmployeeSortKey};

/// The four entity managers of one shop
#[derive(Debug, Default, Clone)]
pub struct Registry {
    pub phones: PhoneManager,
    pub invoices: InvoiceManager,
    pub customers: CustomerManager,
    pub employees: EmployeeManager,
}

impl Registry {
    /// Creates a registry with empty managers
    pub fn new() -> Self {
        Self::default()
    }

    /// Cross-entity reports over the current phones and invoices
    pub fn analytics(&self) -> Analytics<'_> {
        Analytics::new(&self.phones, &self.invoices)
    }

    /// Total number of records across every manager
    pub fn total_records(&self) -> usize {
        self.phones.count() + self.invoices.count() + self.customers.count() + self.employees.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Phone;

    fn phone(id: &str, price: f64) -> Phone {
        Phone::new(id, format!("Model {}", id), "Brand", 128, price, 1, 2024)
    }

    #[test]
    fn direction_reverses_ordering() {
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Descending.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut manager = PhoneManager::new();
        for id in ["P3", "P1", "P2"] {
            manager.add(phone(id, 10.0));
        }

        let ids: Vec<_> = manager.get_all().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["P3", "P1", "P2"]);
        assert_eq!(manager.get_all(), manager.get_all());
    }

    #[test]
    fn update_preserves_position() {
        let mut manager = PhoneManager::new();
        manager.add(phone("P1", 10.0));
        manager.add(phone("P2", 20.0));
        manager.add(phone("P3", 30.0));

        assert!(manager.update("p2", phone("P2", 99.0)));

        let all = manager.get_all();
        assert_eq!(all[1].id, "P2");
        assert_eq!(all[1].price, 99.0);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn update_missing_returns_false() {
        let mut manager = PhoneManager::new();
        manager.add(phone("P1", 10.0));
        assert!(!manager.update("P9", phone("P9", 1.0)));
        assert_eq!(manager.find_by_id("P1").unwrap().price, 10.0);
    }

    #[test]
    fn update_does_not_check_new_id() {
        let mut manager = PhoneManager::new();
        manager.add(phone("P1", 10.0));

        assert!(manager.update("P1", phone("P7", 70.0)));
        assert!(manager.find_by_id("P1").is_none());
        assert_eq!(manager.find_by_id("P7").unwrap().price, 70.0);
    }

    #[test]
    fn update_replaces_every_duplicate() {
        let mut manager = PhoneManager::new();
        manager.add(phone("P1", 10.0));
        manager.add(phone("P2", 20.0));
        manager.add(phone("p1", 30.0));

        assert!(manager.update("P1", phone("P1", 5.0)));

        let prices: Vec<_> = manager.get_all().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![5.0, 20.0, 5.0]);
    }

    #[test]
    fn delete_then_find() {
        let mut manager = PhoneManager::new();
        manager.add(phone("P1", 10.0));
        manager.add(phone("P2", 20.0));

        assert!(manager.delete("P1"));
        assert!(manager.find_by_id("P1").is_none());
        assert_eq!(manager.count(), 1);
    }

    #[test]
    fn delete_missing_leaves_store_unchanged() {
        let mut manager = PhoneManager::new();
        manager.add(phone("P1", 10.0));
        manager.add(phone("P2", 20.0));
        let before = manager.get_all();

        assert!(!manager.delete("P9"));

        let after = manager.get_all();
        assert_eq!(after.len(), before.len());
        let ids: Vec<_> = after.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2"]);
    }

    #[test]
    fn delete_removes_every_duplicate() {
        let mut manager = PhoneManager::new();
        manager.add(phone("P1", 10.0));
        manager.add(phone("P1", 11.0));
        manager.add(phone("P2", 20.0));

        assert!(manager.delete("p1"));
        assert_eq!(manager.count(), 1);
    }

    #[test]
    fn find_by_id_returns_first_duplicate() {
        let mut manager = PhoneManager::new();
        manager.add(phone("P1", 10.0));
        manager.add(phone("P1", 11.0));

        assert_eq!(manager.find_by_id("p1").unwrap().price, 10.0);
    }

    #[test]
    fn replace_all_overwrites() {
        let mut manager = PhoneManager::new();
        manager.add(phone("OLD", 1.0));

        let replacement = vec![phone("B", 2.0), phone("A", 3.0)];
        manager.replace_all(replacement.clone());

        let ids: Vec<_> = manager.get_all().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert!(manager.find_by_id("OLD").is_none());
    }

    #[test]
    fn registry_counts_records() {
        let mut registry = Registry::new();
        registry.phones.add(phone("P1", 10.0));
        assert_eq!(registry.total_records(), 1);
    }
}
