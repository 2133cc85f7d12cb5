//! phone-store - Inventory, sales and reporting for a phone shop
//!
//! Records (phones, invoices, customers, employees) live in insertion-ordered
//! stores, are managed through per-entity managers, and persist as plain CSV
//! files in a data directory. Cross-entity reports join invoices to phones.

pub mod domain;
pub mod manager;
pub mod analytics;
pub mod storage;
pub mod cli;

pub use domain::{Customer, Employee, Invoice, Phone};
pub use manager::Registry;
