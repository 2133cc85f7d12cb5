//! Sample records for a new shop

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::domain::{Customer, Employee, Invoice, Phone, Record, RecordError, DATE_FORMAT};
use crate::manager::{Manager, Registry};

/// Number of records added per entity by [`seed_empty`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub phones: usize,
    pub invoices: usize,
    pub customers: usize,
    pub employees: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.phones + self.invoices + self.customers + self.employees
    }
}

pub fn phones() -> Vec<Phone> {
    vec![
        Phone::new("P001", "iPhone 15 Pro", "Apple", 256, 33_990_000.0, 15, 2023),
        Phone::new("P002", "Galaxy S24 Ultra", "Samsung", 256, 31_990_000.0, 12, 2024),
        Phone::new("P003", "Xiaomi 14", "Xiaomi", 256, 18_990_000.0, 20, 2024),
        Phone::new("P004", "Oppo Reno 11", "Oppo", 128, 10_990_000.0, 25, 2023),
        Phone::new("P005", "Vivo V30", "Vivo", 256, 13_990_000.0, 18, 2024),
    ]
}

/// Sample invoices; fails if a sample date does not parse
pub fn invoices() -> Result<Vec<Invoice>, RecordError> {
    let rows = [
        ("INV001", "Nguyen Van A", "0909000001", "P001", 1, 34_990_000.0, 0.05, "2024-03-12", "Tran Thi B"),
        ("INV002", "Tran Thi C", "0909000002", "P002", 2, 31_990_000.0, 0.02, "2024-03-15", "Le Van D"),
        ("INV003", "Le Van E", "0909000003", "P003", 3, 18_990_000.0, 0.03, "2024-04-02", "Tran Thi B"),
        ("INV004", "Pham Thi F", "0909000004", "P004", 2, 10_990_000.0, 0.01, "2024-04-18", "Nguyen Van G"),
        ("INV005", "Do Van H", "0909000005", "P005", 1, 13_990_000.0, 0.04, "2024-05-05", "Le Van D"),
    ];

    rows.into_iter()
        .map(|(id, customer, phone, phone_id, qty, price, discount, date, seller)| {
            let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| RecordError::InvalidDate {
                kind: Invoice::KIND,
                field: "sale_date",
                value: date.to_string(),
            })?;
            Ok(Invoice::new(id, customer, phone, phone_id, qty, price, discount, date, seller))
        })
        .collect()
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer::new("C001", "Nguyen Van A", "0909000001", "nguyenvana@gmail.com", "Gold", 2021, 33_240_500.0),
        Customer::new("C002", "Tran Thi C", "0909000002", "tranthic@yahoo.com", "Platinum", 2019, 62_700_400.0),
        Customer::new("C003", "Le Van E", "0909000003", "levane@gmail.com", "Gold", 2022, 55_260_900.0),
        Customer::new("C004", "Pham Thi F", "0909000004", "phamthif@outlook.com", "Silver", 2023, 21_760_200.0),
        Customer::new("C005", "Do Van H", "0909000005", "dovanh@gmail.com", "Bronze", 2024, 13_430_400.0),
    ]
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee::new("E001", "Tran Thi B", "Sales", "0911000001", 12_000_000.0, 4, 88_500_000.0),
        Employee::new("E002", "Le Van D", "Sales", "0911000002", 11_000_000.0, 3, 76_100_000.0),
        Employee::new("E003", "Nguyen Van G", "Sales", "0911000003", 9_500_000.0, 1, 21_760_200.0),
        Employee::new("E004", "Hoang Thi K", "Manager", "0911000004", 25_000_000.0, 9, 0.0),
    ]
}

/// Fills every empty manager with its sample records
///
/// Managers that already hold records are left alone.
pub fn seed_empty(registry: &mut Registry) -> Result<SeedReport, RecordError> {
    let mut report = SeedReport::default();

    if registry.phones.is_empty() {
        let records = phones();
        report.phones = records.len();
        registry.phones.replace_all(records);
    }
    if registry.invoices.is_empty() {
        let records = invoices()?;
        report.invoices = records.len();
        registry.invoices.replace_all(records);
    }
    if registry.customers.is_empty() {
        let records = customers();
        report.customers = records.len();
        registry.customers.replace_all(records);
    }
    if registry.employees.is_empty() {
        let records = employees();
        report.employees = records.len();
        registry.employees.replace_all(records);
    }

    debug!(?report, "seeded empty entities");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_every_empty_entity() {
        let mut registry = Registry::new();
        let report = seed_empty(&mut registry).unwrap();

        assert_eq!(report.phones, 5);
        assert_eq!(report.invoices, 5);
        assert_eq!(report.customers, 5);
        assert_eq!(report.employees, 4);
        assert_eq!(report.total(), registry.total_records());
        assert_eq!(registry.phones.find_by_id("p001").unwrap().brand, "Apple");
    }

    #[test]
    fn leaves_populated_entities_alone() {
        let mut registry = Registry::new();
        registry.phones.add(Phone::new("X1", "Mine", "Nokia", 32, 1.0, 1, 2010));

        let report = seed_empty(&mut registry).unwrap();

        assert_eq!(report.phones, 0);
        assert_eq!(registry.phones.count(), 1);
        assert_eq!(registry.invoices.count(), 5);
    }

    #[test]
    fn second_seed_adds_nothing() {
        let mut registry = Registry::new();
        seed_empty(&mut registry).unwrap();
        assert_eq!(seed_empty(&mut registry).unwrap().total(), 0);
    }

    #[test]
    fn sample_invoices_reference_sample_phones() {
        let phones = phones();
        let invoices = invoices().unwrap();
        assert_eq!(invoices.len(), 5);
        for invoice in invoices {
            assert!(phones.iter().any(|p| p.id == invoice.phone_id), "{}", invoice.id);
        }
    }

    #[test]
    fn sample_invoice_totals() {
        let first = &invoices().unwrap()[0];
        assert_eq!(first.sale_date, NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
        assert!((first.net_total() - 33_240_500.0).abs() < 1e-3);
    }
}
