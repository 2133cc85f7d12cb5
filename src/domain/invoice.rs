//! Invoice domain model
//!
//! A sale of one phone model to a customer. The `phone_id` refers to a
//! [`Phone`](super::Phone) but the reference is never enforced.

use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::record::{Record, RecordError, Row, DATE_FORMAT};

/// A sales invoice
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    /// Unique identifier (e.g. `INV001`)
    pub id: String,

    pub customer_name: String,

    pub customer_phone: String,

    /// ID of the phone sold
    pub phone_id: String,

    pub quantity: i32,

    /// Price per unit at the time of sale (VND)
    pub unit_price: f64,

    /// Discount as a fraction, expected in 0..=1 but not checked
    pub discount_rate: f64,

    pub sale_date: NaiveDate,

    /// Employee who made the sale
    pub salesperson: String,
}

impl Invoice {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        phone_id: impl Into<String>,
        quantity: i32,
        unit_price: f64,
        discount_rate: f64,
        sale_date: NaiveDate,
        salesperson: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            phone_id: phone_id.into(),
            quantity,
            unit_price,
            discount_rate,
            sale_date,
            salesperson: salesperson.into(),
        }
    }

    /// Amount before discount (`unit_price × quantity`)
    pub fn gross_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Amount the customer pays (`gross × (1 − discount_rate)`)
    pub fn net_total(&self) -> f64 {
        self.gross_total() * (1.0 - self.discount_rate)
    }

    /// Amount taken off by the discount
    pub fn discount_amount(&self) -> f64 {
        self.gross_total() - self.net_total()
    }

    /// Calendar month of the sale (1-12)
    pub fn sale_month(&self) -> u32 {
        self.sale_date.month()
    }

    /// Calendar year of the sale
    pub fn sale_year(&self) -> i32 {
        self.sale_date.year()
    }
}

impl Record for Invoice {
    const KIND: &'static str = "invoice";
    const FIELD_COUNT: usize = 9;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.customer_name.clone(),
            self.customer_phone.clone(),
            self.phone_id.clone(),
            self.quantity.to_string(),
            self.unit_price.to_string(),
            self.discount_rate.to_string(),
            self.sale_date.format(DATE_FORMAT).to_string(),
            self.salesperson.clone(),
        ]
    }

    fn from_row(fields: &[&str]) -> Result<Self, RecordError> {
        let row = Row::new(Self::KIND, Self::FIELD_COUNT, fields)?;
        Ok(Self {
            id: row.text(0),
            customer_name: row.text(1),
            customer_phone: row.text(2),
            phone_id: row.text(3),
            quantity: row.number(4, "quantity")?,
            unit_price: row.number(5, "unit_price")?,
            discount_rate: row.number(6, "discount_rate")?,
            sale_date: row.date(7, "sale_date")?,
            salesperson: row.text(8),
        })
    }
}

impl PartialEq for Invoice {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Invoice {}

impl Hash for Invoice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn totals_apply_discount() {
        let invoice = Invoice::new("I1", "A", "090", "P1", 3, 1000.0, 0.1, date(2024, 1, 5), "B");

        assert_eq!(invoice.gross_total(), 3000.0);
        assert!((invoice.net_total() - 2700.0).abs() < 1e-9);
        assert!((invoice.discount_amount() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn zero_discount_keeps_gross() {
        let invoice = Invoice::new("I1", "A", "090", "P1", 2, 500.0, 0.0, date(2024, 1, 5), "B");
        assert_eq!(invoice.net_total(), invoice.gross_total());
    }

    #[test]
    fn parses_csv_row_with_date() {
        let fields = [
            "INV001",
            "Nguyen Van A",
            "0909000001",
            "P001",
            "1",
            "34990000",
            "0.05",
            "2024-03-12",
            "Tran Thi B",
        ];
        let invoice = Invoice::from_row(&fields).unwrap();

        assert_eq!(invoice.sale_date, date(2024, 3, 12));
        assert_eq!(invoice.sale_month(), 3);
        assert_eq!(invoice.sale_year(), 2024);
        assert_eq!(invoice.salesperson, "Tran Thi B");
    }

    #[test]
    fn row_formats_iso_date() {
        let invoice = Invoice::new("I1", "A", "090", "P1", 1, 10.0, 0.0, date(2024, 4, 2), "B");
        assert_eq!(invoice.to_row()[7], "2024-04-02");
    }

    #[test]
    fn rejects_short_row() {
        let fields = ["INV001", "Nguyen Van A", "0909000001", "P001", "1"];
        assert_eq!(
            Invoice::from_row(&fields).unwrap_err(),
            RecordError::FieldCount {
                kind: "invoice",
                expected: 9,
                found: 5
            }
        );
    }
}
