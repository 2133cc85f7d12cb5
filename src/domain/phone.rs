//! Phone domain model
//!
//! A phone model carried in the shop's inventory.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::record::{Record, RecordError, Row};

/// A phone model in stock
#[derive(Debug, Clone, Serialize)]
pub struct Phone {
    /// Unique identifier (e.g. `P001`)
    pub id: String,

    /// Commercial model name
    pub model: String,

    /// Manufacturer brand
    pub brand: String,

    /// Built-in storage in GB
    pub storage_gb: i32,

    /// Selling price (VND)
    pub price: f64,

    /// Units in stock
    pub stock: i32,

    /// Year the model was released
    pub release_year: i32,
}

impl Phone {
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        brand: impl Into<String>,
        storage_gb: i32,
        price: f64,
        stock: i32,
        release_year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            brand: brand.into(),
            storage_gb,
            price,
            stock,
            release_year,
        }
    }

    /// Value of the units in stock (`price × stock`)
    pub fn inventory_value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }

    /// Returns true if at least one unit is in stock
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Record for Phone {
    const KIND: &'static str = "phone";
    const FIELD_COUNT: usize = 7;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.model.clone(),
            self.brand.clone(),
            self.storage_gb.to_string(),
            self.price.to_string(),
            self.stock.to_string(),
            self.release_year.to_string(),
        ]
    }

    fn from_row(fields: &[&str]) -> Result<Self, RecordError> {
        let row = Row::new(Self::KIND, Self::FIELD_COUNT, fields)?;
        Ok(Self {
            id: row.text(0),
            model: row.text(1),
            brand: row.text(2),
            storage_gb: row.number(3, "storage_gb")?,
            price: row.number(4, "price")?,
            stock: row.number(5, "stock")?,
            release_year: row.number(6, "release_year")?,
        })
    }
}

impl PartialEq for Phone {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Phone {}

impl Hash for Phone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_value_is_price_times_stock() {
        let phone = Phone::new("P1", "iPhone 15", "Apple", 128, 100.0, 2, 2023);
        assert_eq!(phone.inventory_value(), 200.0);
    }

    #[test]
    fn equality_is_by_id_only() {
        let a = Phone::new("P1", "iPhone 15", "Apple", 128, 100.0, 2, 2023);
        let b = Phone::new("P1", "Galaxy", "Samsung", 256, 50.0, 9, 2024);
        let c = Phone::new("p1", "iPhone 15", "Apple", 128, 100.0, 2, 2023);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.has_id("p1"));
    }

    #[test]
    fn parses_csv_row() {
        let fields = ["P001", " iPhone 15 Pro ", "Apple", "256", "33990000.0", "15", "2023"];
        let phone = Phone::from_row(&fields).unwrap();

        assert_eq!(phone.model, "iPhone 15 Pro");
        assert_eq!(phone.storage_gb, 256);
        assert_eq!(phone.price, 33_990_000.0);
        assert_eq!(phone.stock, 15);
        assert_eq!(phone.release_year, 2023);
    }

    #[test]
    fn row_keeps_field_order() {
        let phone = Phone::new("P002", "Galaxy S24", "Samsung", 256, 31990000.0, 12, 2024);
        assert_eq!(
            phone.to_row(),
            vec!["P002", "Galaxy S24", "Samsung", "256", "31990000", "12", "2024"]
        );
    }

    #[test]
    fn rejects_non_numeric_stock() {
        let fields = ["P001", "iPhone", "Apple", "256", "100", "many", "2023"];
        assert!(matches!(
            Phone::from_row(&fields),
            Err(RecordError::InvalidNumber { field: "stock", .. })
        ));
    }
}
