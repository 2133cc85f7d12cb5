//! Phone inventory manager

use std::collections::HashMap;

use crate::domain::{contains_ignore_case, Extreme, OrderedStore, Phone};

use super::SortDirection;

/// Field to sort phones by
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PhoneSortKey {
    Price,
    Stock,
    ReleaseYear,
    Storage,
}

/// Inventory of phone models
#[derive(Debug, Default, Clone)]
pub struct PhoneManager {
    phones: OrderedStore<Phone>,
}

impl_manager!(PhoneManager, Phone, phones);

impl PhoneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phones whose brand contains `keyword` (case-insensitive)
    pub fn find_by_brand(&self, keyword: &str) -> Vec<Phone> {
        self.phones.filter(|p| contains_ignore_case(&p.brand, keyword))
    }

    /// Phones priced within `min..=max`
    pub fn find_by_price_range(&self, min: f64, max: f64) -> Vec<Phone> {
        self.phones.filter(|p| p.price >= min && p.price <= max)
    }

    /// Sorted copy; phones with equal keys keep their insertion order
    pub fn sort_by(&self, key: PhoneSortKey, direction: SortDirection) -> Vec<Phone> {
        self.phones.sort_snapshot(|a, b| {
            let ordering = match key {
                PhoneSortKey::Price => a.price.total_cmp(&b.price),
                PhoneSortKey::Stock => a.stock.cmp(&b.stock),
                PhoneSortKey::ReleaseYear => a.release_year.cmp(&b.release_year),
                PhoneSortKey::Storage => a.storage_gb.cmp(&b.storage_gb),
            };
            direction.apply(ordering)
        })
    }

    pub fn most_expensive(&self) -> Option<&Phone> {
        self.phones
            .find_extreme(|a, b| a.price.total_cmp(&b.price), Extreme::Max)
    }

    pub fn cheapest(&self) -> Option<&Phone> {
        self.phones
            .find_extreme(|a, b| a.price.total_cmp(&b.price), Extreme::Min)
    }

    pub fn highest_stock(&self) -> Option<&Phone> {
        self.phones.find_extreme(|a, b| a.stock.cmp(&b.stock), Extreme::Max)
    }

    pub fn lowest_stock(&self) -> Option<&Phone> {
        self.phones.find_extreme(|a, b| a.stock.cmp(&b.stock), Extreme::Min)
    }

    /// Sum of `price × stock` over every phone
    pub fn total_inventory_value(&self) -> f64 {
        self.phones.sum_by(Phone::inventory_value)
    }

    /// Mean price, 0 when empty
    pub fn average_price(&self) -> f64 {
        self.phones.average_by(|p| p.price)
    }

    /// Number of phones whose brand contains `keyword`
    pub fn count_by_brand_keyword(&self, keyword: &str) -> usize {
        self.phones
            .count_where(|p| contains_ignore_case(&p.brand, keyword))
    }

    /// Number of phones with at least one unit in stock
    pub fn count_in_stock(&self) -> usize {
        self.phones.count_where(Phone::in_stock)
    }

    /// Number of phone models per exact brand
    pub fn count_per_brand(&self) -> HashMap<String, usize> {
        self.phones.count_by(|p| p.brand.clone())
    }

    /// Number of phone models per storage size
    pub fn count_by_storage(&self) -> HashMap<i32, usize> {
        self.phones.count_by(|p| p.storage_gb)
    }
}
