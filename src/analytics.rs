//! Cross-entity sales reports
//!
//! Reports join invoices to phones by exact phone ID. The join is never
//! enforced when records are written, so an invoice may point at a phone
//! that does not exist; such invoices are grouped under [`UNKNOWN_BRAND`].
//! The phone index is rebuilt on every call and the first phone wins when
//! IDs are duplicated.

use std::collections::HashMap;

use crate::domain::{contains_ignore_case, Invoice, Phone};
use crate::manager::{InvoiceManager, Manager, PhoneManager};

/// Brand reported for invoices whose phone is missing
pub const UNKNOWN_BRAND: &str = "Khác";

/// Result of looking up an invoice's phone
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhoneRef<'a> {
    Known(&'a Phone),
    Unknown,
}

impl<'a> PhoneRef<'a> {
    pub fn brand(&self) -> &'a str {
        match *self {
            PhoneRef::Known(phone) => &phone.brand,
            PhoneRef::Unknown => UNKNOWN_BRAND,
        }
    }
}

/// Read-only view over the phone and invoice managers
#[derive(Debug, Clone, Copy)]
pub struct Analytics<'a> {
    phones: &'a PhoneManager,
    invoices: &'a InvoiceManager,
}

impl<'a> Analytics<'a> {
    pub fn new(phones: &'a PhoneManager, invoices: &'a InvoiceManager) -> Self {
        Self { phones, invoices }
    }

    /// Net revenue per phone brand
    pub fn revenue_by_brand(&self) -> HashMap<String, f64> {
        self.sum_by_brand(Invoice::net_total)
    }

    /// Units sold per phone brand
    pub fn quantity_sold_by_brand(&self) -> HashMap<String, i64> {
        let index = self.phone_index();
        let mut quantities = HashMap::new();
        for inv in self.invoices.store() {
            let brand = lookup(&index, &inv.phone_id).brand();
            *quantities.entry(brand.to_string()).or_insert(0) += i64::from(inv.quantity);
        }
        quantities
    }

    /// Net revenue per month (1-12) for invoices sold in `year`
    pub fn revenue_by_month(&self, year: i32) -> HashMap<u32, f64> {
        let mut revenue = HashMap::new();
        for inv in self.invoices.store().iter().filter(|inv| inv.sale_year() == year) {
            *revenue.entry(inv.sale_month()).or_insert(0.0) += inv.net_total();
        }
        revenue
    }

    /// Per salesperson, the number of invoices whose net total is at least `min_revenue`
    pub fn invoices_by_salesperson_with_min_revenue(&self, min_revenue: f64) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for inv in self.invoices.store() {
            if inv.net_total() >= min_revenue {
                *counts.entry(inv.salesperson.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Per brand, the number of phone models with at least `min_stock` units
    pub fn phones_by_brand_with_stock_at_least(&self, min_stock: i32) -> HashMap<String, usize> {
        self.count_phones_by_brand(|p| p.stock >= min_stock)
    }

    /// Per brand, the number of phone models priced at `min_price` or more
    pub fn phones_by_brand_with_price_at_least(&self, min_price: f64) -> HashMap<String, usize> {
        self.count_phones_by_brand(|p| p.price >= min_price)
    }

    /// Mean discount rate per salesperson
    pub fn average_discount_by_salesperson(&self) -> HashMap<String, f64> {
        let mut totals: HashMap<String, (f64, usize)> = HashMap::new();
        for inv in self.invoices.store() {
            let entry = totals.entry(inv.salesperson.clone()).or_insert((0.0, 0));
            entry.0 += inv.discount_rate;
            entry.1 += 1;
        }
        totals
            .into_iter()
            .map(|(seller, (sum, count))| (seller, sum / count as f64))
            .collect()
    }

    /// Number of invoices whose customer name contains `keyword`
    pub fn count_invoices_by_customer_keyword(&self, keyword: &str) -> usize {
        self.invoices
            .store()
            .count_where(|inv| contains_ignore_case(&inv.customer_name, keyword))
    }

    /// Looks up the phone sold on an invoice
    pub fn phone_for(&self, invoice: &Invoice) -> PhoneRef<'a> {
        lookup(&self.phone_index(), &invoice.phone_id)
    }

    fn sum_by_brand(&self, value: impl Fn(&Invoice) -> f64) -> HashMap<String, f64> {
        let index = self.phone_index();
        let mut sums = HashMap::new();
        for inv in self.invoices.store() {
            let brand = lookup(&index, &inv.phone_id).brand();
            *sums.entry(brand.to_string()).or_insert(0.0) += value(inv);
        }
        sums
    }

    fn count_phones_by_brand(&self, predicate: impl Fn(&Phone) -> bool) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for phone in self.phones.store().iter().filter(|p| predicate(p)) {
            *counts.entry(phone.brand.clone()).or_insert(0) += 1;
        }
        counts
    }

    fn phone_index(&self) -> HashMap<&'a str, &'a Phone> {
        let mut index = HashMap::new();
        for phone in self.phones.store() {
            index.entry(phone.id.as_str()).or_insert(phone);
        }
        index
    }
}

fn lookup<'a>(index: &HashMap<&'a str, &'a Phone>, phone_id: &str) -> PhoneRef<'a> {
    match index.get(phone_id).copied() {
        Some(phone) => PhoneRef::Known(phone),
        None => PhoneRef::Unknown,
    }
}
