//! Sales invoice manager

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{contains_ignore_case, eq_ignore_case, Extreme, Invoice, OrderedStore};

use super::SortDirection;

/// Field to sort invoices by
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InvoiceSortKey {
    SaleDate,
    NetTotal,
    Quantity,
}

/// Ledger of sales invoices
#[derive(Debug, Default, Clone)]
pub struct InvoiceManager {
    invoices: OrderedStore<Invoice>,
}

impl_manager!(InvoiceManager, Invoice, invoices);

impl InvoiceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoices whose customer name contains `keyword` (case-insensitive)
    pub fn find_by_customer_name(&self, keyword: &str) -> Vec<Invoice> {
        self.invoices
            .filter(|inv| contains_ignore_case(&inv.customer_name, keyword))
    }

    /// Invoices for one phone, matched case-insensitively
    pub fn find_by_phone_id(&self, phone_id: &str) -> Vec<Invoice> {
        self.invoices
            .filter(|inv| eq_ignore_case(&inv.phone_id, phone_id))
    }

    /// Invoices sold within `from..=to`
    pub fn find_by_date_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<Invoice> {
        self.invoices
            .filter(|inv| inv.sale_date >= from && inv.sale_date <= to)
    }

    /// Sorted copy; invoices with equal keys keep their insertion order
    pub fn sort_by(&self, key: InvoiceSortKey, direction: SortDirection) -> Vec<Invoice> {
        self.invoices.sort_snapshot(|a, b| {
            let ordering = match key {
                InvoiceSortKey::SaleDate => a.sale_date.cmp(&b.sale_date),
                InvoiceSortKey::NetTotal => a.net_total().total_cmp(&b.net_total()),
                InvoiceSortKey::Quantity => a.quantity.cmp(&b.quantity),
            };
            direction.apply(ordering)
        })
    }

    /// Invoice with the highest net total
    pub fn largest_order(&self) -> Option<&Invoice> {
        self.invoices
            .find_extreme(|a, b| a.net_total().total_cmp(&b.net_total()), Extreme::Max)
    }

    /// Invoice with the lowest net total
    pub fn smallest_order(&self) -> Option<&Invoice> {
        self.invoices
            .find_extreme(|a, b| a.net_total().total_cmp(&b.net_total()), Extreme::Min)
    }

    pub fn highest_quantity(&self) -> Option<&Invoice> {
        self.invoices
            .find_extreme(|a, b| a.quantity.cmp(&b.quantity), Extreme::Max)
    }

    pub fn lowest_quantity(&self) -> Option<&Invoice> {
        self.invoices
            .find_extreme(|a, b| a.quantity.cmp(&b.quantity), Extreme::Min)
    }

    /// Sum of net totals
    pub fn total_revenue(&self) -> f64 {
        self.invoices.sum_by(Invoice::net_total)
    }

    /// Mean net total, 0 when empty
    pub fn average_invoice_value(&self) -> f64 {
        self.invoices.average_by(Invoice::net_total)
    }

    pub fn total_quantity_sold(&self) -> i64 {
        self.invoices.iter().map(|inv| i64::from(inv.quantity)).sum()
    }

    /// Sum of the amounts taken off by discounts
    pub fn total_discount_amount(&self) -> f64 {
        self.invoices.sum_by(Invoice::discount_amount)
    }

    pub fn count_by_salesperson(&self) -> HashMap<String, usize> {
        self.invoices.count_by(|inv| inv.salesperson.clone())
    }

    /// Net revenue per salesperson
    pub fn revenue_by_salesperson(&self) -> HashMap<String, f64> {
        let mut revenue = HashMap::new();
        for inv in &self.invoices {
            *revenue.entry(inv.salesperson.clone()).or_insert(0.0) += inv.net_total();
        }
        revenue
    }

    /// Net revenue per calendar month (1-12), summed across every year
    pub fn revenue_by_month_any_year(&self) -> HashMap<u32, f64> {
        let mut revenue = HashMap::new();
        for inv in &self.invoices {
            *revenue.entry(inv.sale_month()).or_insert(0.0) += inv.net_total();
        }
        revenue
    }
}
