//! Customer manager

use std::collections::HashMap;

use crate::domain::{contains_ignore_case, Customer, Extreme, OrderedStore};

use super::SortDirection;

/// Field to sort customers by
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CustomerSortKey {
    /// Full name, ignoring case
    Name,
    TotalSpent,
    JoinYear,
}

#[derive(Debug, Default, Clone)]
pub struct CustomerManager {
    customers: OrderedStore<Customer>,
}

impl_manager!(CustomerManager, Customer, customers);

impl CustomerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Customers whose full name contains `keyword` (case-insensitive)
    pub fn find_by_name(&self, keyword: &str) -> Vec<Customer> {
        self.customers
            .filter(|c| contains_ignore_case(&c.full_name, keyword))
    }

    /// Customers whose tier contains `keyword` (case-insensitive)
    pub fn find_by_tier(&self, keyword: &str) -> Vec<Customer> {
        self.customers.filter(|c| contains_ignore_case(&c.tier, keyword))
    }

    pub fn sort_by(&self, key: CustomerSortKey, direction: SortDirection) -> Vec<Customer> {
        self.customers.sort_snapshot(|a, b| {
            let ordering = match key {
                CustomerSortKey::Name => a
                    .full_name
                    .to_lowercase()
                    .cmp(&b.full_name.to_lowercase()),
                CustomerSortKey::TotalSpent => a.total_spent.total_cmp(&b.total_spent),
                CustomerSortKey::JoinYear => a.join_year.cmp(&b.join_year),
            };
            direction.apply(ordering)
        })
    }

    pub fn highest_spent(&self) -> Option<&Customer> {
        self.customers
            .find_extreme(|a, b| a.total_spent.total_cmp(&b.total_spent), Extreme::Max)
    }

    pub fn lowest_spent(&self) -> Option<&Customer> {
        self.customers
            .find_extreme(|a, b| a.total_spent.total_cmp(&b.total_spent), Extreme::Min)
    }

    /// Longest-standing customer
    pub fn earliest_join(&self) -> Option<&Customer> {
        self.customers
            .find_extreme(|a, b| a.join_year.cmp(&b.join_year), Extreme::Min)
    }

    /// Most recently joined customer
    pub fn latest_join(&self) -> Option<&Customer> {
        self.customers
            .find_extreme(|a, b| a.join_year.cmp(&b.join_year), Extreme::Max)
    }

    pub fn total_spent(&self) -> f64 {
        self.customers.sum_by(|c| c.total_spent)
    }

    /// Mean spending, 0 when empty
    pub fn average_spent(&self) -> f64 {
        self.customers.average_by(|c| c.total_spent)
    }

    pub fn count_by_tier(&self) -> HashMap<String, usize> {
        self.customers.count_by(|c| c.tier.clone())
    }

    pub fn count_by_join_year(&self) -> HashMap<i32, usize> {
        self.customers.count_by(|c| c.join_year)
    }

    /// Customers per email domain; addresses without `@` count as `unknown`
    pub fn count_by_email_domain(&self) -> HashMap<String, usize> {
        self.customers.count_by(|c| c.email_domain().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UNKNOWN_EMAIL_DOMAIN;
    use crate::manager::Manager;

    fn customer(id: &str, name: &str, email: &str, tier: &str, year: i32, spent: f64) -> Customer {
        Customer::new(id, name, "0900", email, tier, year, spent)
    }

    fn sample() -> CustomerManager {
        let mut manager = CustomerManager::new();
        manager.add(customer("C1", "nguyen van an", "an@gmail.com", "Gold", 2020, 5000.0));
        manager.add(customer("C2", "Tran Binh", "binh@yahoo.com", "Silver", 2022, 1000.0));
        manager.add(customer("C3", "Le Chi", "chi", "Gold", 2020, 5000.0));
        manager
    }

    fn ids(customers: &[Customer]) -> Vec<&str> {
        customers.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn name_and_tier_search() {
        let manager = sample();
        assert_eq!(ids(&manager.find_by_name("AN")), vec!["C1", "C2"]);
        assert_eq!(ids(&manager.find_by_tier("gold")), vec!["C1", "C3"]);
        assert!(manager.find_by_tier("platinum").is_empty());
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let manager = sample();
        let sorted = manager.sort_by(CustomerSortKey::Name, SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec!["C3", "C1", "C2"]);
    }

    #[test]
    fn sort_by_total_spent_descending_is_stable() {
        let manager = sample();
        let sorted = manager.sort_by(CustomerSortKey::TotalSpent, SortDirection::Descending);
        assert_eq!(ids(&sorted), vec!["C1", "C3", "C2"]);
    }

    #[test]
    fn extremes_prefer_first_on_tie() {
        let manager = sample();
        assert_eq!(manager.highest_spent().unwrap().id, "C1");
        assert_eq!(manager.lowest_spent().unwrap().id, "C2");
        assert_eq!(manager.earliest_join().unwrap().id, "C1");
        assert_eq!(manager.latest_join().unwrap().id, "C2");
    }

    #[test]
    fn spending_aggregates() {
        let manager = sample();
        assert_eq!(manager.total_spent(), 11000.0);
        assert!((manager.average_spent() - 11000.0 / 3.0).abs() < 1e-9);
        assert_eq!(CustomerManager::new().average_spent(), 0.0);
    }

    #[test]
    fn grouped_counts() {
        let manager = sample();

        assert_eq!(manager.count_by_tier().get("Gold"), Some(&2));
        assert_eq!(manager.count_by_join_year().get(&2020), Some(&2));

        let domains = manager.count_by_email_domain();
        assert_eq!(domains.get("gmail.com"), Some(&1));
        assert_eq!(domains.get("yahoo.com"), Some(&1));
        assert_eq!(domains.get(UNKNOWN_EMAIL_DOMAIN), Some(&1));
    }
}
