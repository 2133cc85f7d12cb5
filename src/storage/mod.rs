//! # Storage Layer
//!
//! Persistence for the phone store as plain CSV files in one data directory.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Phones | CSV, 7 fields | `data/phones.csv` |
//! | Invoices | CSV, 9 fields | `data/invoices.csv` |
//! | Customers | CSV, 7 fields | `data/customers.csv` |
//! | Employees | CSV, 7 fields | `data/employees.csv` |
//! | Config | TOML | `data/phone-store.toml` |
//!
//! File names are configurable in `phone-store.toml`.
//!
//! ## Concurrency Safety
//!
//! - [`CsvFile`] uses file locking (`fs2`) for concurrent access
//! - All writes are atomic (temp file + rename)
//!
//! ## Key Types
//!
//! - [`Shop`] - Entry point for a data directory
//! - [`CsvFile`] - Read/write one record type as CSV
//! - [`ShopConfig`] / [`GlobalConfig`] - Shop and user configuration

mod csv_file;
mod config;
mod shop;
pub mod seed;

pub use csv_file::CsvFile;
pub use config::{ConfigError, FilesConfig, GlobalConfig, OutputFormat, ReportConfig, ShopConfig, CONFIG_FILE};
pub use shop::{Shop, ShopError};
pub use seed::{seed_empty, SeedReport};
