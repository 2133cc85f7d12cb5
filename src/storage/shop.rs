//! Shop management
//!
//! A shop is a data directory holding `phone-store.toml` and one CSV file
//! per entity. Handles initialization and loading/saving the registry.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::info;

use super::config::{ShopConfig, CONFIG_FILE};
use super::CsvFile;
use crate::domain::{Customer, Employee, Invoice, Phone};
use crate::manager::{Manager, Registry};

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("No phone store at {0}. Run 'phone-store init' first.")]
    NotFound(PathBuf),

    #[error("Data path is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// A phone store data directory
#[derive(Debug, Clone)]
pub struct Shop {
    root: PathBuf,
    config: ShopConfig,
}

impl Shop {
    /// Opens an existing shop at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !Self::exists_at(&root) {
            return Err(ShopError::NotFound(root).into());
        }

        let config = ShopConfig::load(&root)?;

        Ok(Self { root, config })
    }

    /// Initializes a shop at the given path
    ///
    /// Creates the directory and a default config when missing. Existing
    /// config and data files are left untouched.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if root.exists() && !root.is_dir() {
            return Err(ShopError::NotADirectory(root).into());
        }

        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create data directory: {}", root.display()))?;

        if !root.join(CONFIG_FILE).exists() {
            ShopConfig::default().save(&root)?;
            info!(path = %root.display(), "created shop config");
        }

        Self::open(root)
    }

    /// Returns true if `root` holds a shop config
    pub fn exists_at(root: &Path) -> bool {
        root.join(CONFIG_FILE).is_file()
    }

    /// Returns the data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn phone_file(&self) -> CsvFile<Phone> {
        CsvFile::new(self.root.join(&self.config.files.phones))
    }

    pub fn invoice_file(&self) -> CsvFile<Invoice> {
        CsvFile::new(self.root.join(&self.config.files.invoices))
    }

    pub fn customer_file(&self) -> CsvFile<Customer> {
        CsvFile::new(self.root.join(&self.config.files.customers))
    }

    pub fn employee_file(&self) -> CsvFile<Employee> {
        CsvFile::new(self.root.join(&self.config.files.employees))
    }

    /// Reads every entity file into a fresh registry
    pub fn load(&self) -> Result<Registry> {
        let mut registry = Registry::new();
        self.reload(&mut registry)?;
        Ok(registry)
    }

    /// Replaces the registry's contents with what is on disk
    ///
    /// All four files are read before anything is replaced, so a failed
    /// read leaves the registry unchanged.
    pub fn reload(&self, registry: &mut Registry) -> Result<()> {
        let phones = self.phone_file().read_all()?;
        let invoices = self.invoice_file().read_all()?;
        let customers = self.customer_file().read_all()?;
        let employees = self.employee_file().read_all()?;

        registry.phones.replace_all(phones);
        registry.invoices.replace_all(invoices);
        registry.customers.replace_all(customers);
        registry.employees.replace_all(employees);

        info!(
            path = %self.root.display(),
            records = registry.total_records(),
            "loaded shop"
        );
        Ok(())
    }

    /// Writes every entity file from the registry
    pub fn save(&self, registry: &Registry) -> Result<()> {
        self.phone_file().write_all(&registry.phones.get_all())?;
        self.invoice_file().write_all(&registry.invoices.get_all())?;
        self.customer_file().write_all(&registry.customers.get_all())?;
        self.employee_file().write_all(&registry.employees.get_all())?;

        info!(
            path = %self.root.display(),
            records = registry.total_records(),
            "saved shop"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_creates_structure() {
        let dir = TempDir::new().unwrap();
        let shop = Shop::init(dir.path().join("data")).unwrap();

        assert!(shop.root().is_dir());
        assert!(shop.root().join(CONFIG_FILE).is_file());
        assert!(Shop::exists_at(shop.root()));
    }

    #[test]
    fn init_is_idempotent() {
        let dir = TempDir::new().unwrap();

        Shop::init(dir.path()).unwrap();
        Shop::init(dir.path()).unwrap();

        assert!(dir.path().join(CONFIG_FILE).is_file());
    }

    #[test]
    fn init_keeps_existing_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "seed_when_empty = false\n").unwrap();

        let shop = Shop::init(dir.path()).unwrap();
        assert!(!shop.config().seed_when_empty);
    }

    #[test]
    fn init_on_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not-a-dir");
        fs::write(&path, "").unwrap();

        assert!(Shop::init(&path).is_err());
    }

    #[test]
    fn open_non_shop_fails() {
        let dir = TempDir::new().unwrap();
        let err = Shop::open(dir.path()).unwrap_err();

        assert!(err.to_string().contains("phone-store init"));
    }

    #[test]
    fn fresh_shop_loads_empty() {
        let dir = TempDir::new().unwrap();
        let shop = Shop::init(dir.path()).unwrap();

        let registry = shop.load().unwrap();
        assert_eq!(registry.total_records(), 0);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let shop = Shop::init(dir.path()).unwrap();

        let mut registry = Registry::new();
        registry.phones.add(Phone::new("P1", "A", "Apple", 128, 10.0, 1, 2024));
        registry.phones.add(Phone::new("P0", "B", "Oppo", 64, 5.0, 0, 2020));
        registry.customers.add(Customer::new("C1", "An", "0900", "an@x.vn", "Gold", 2020, 1.0));
        registry.employees.add(Employee::new("E1", "Binh", "Sales", "0911", 2.0, 1, 3.0));
        shop.save(&registry).unwrap();

        assert!(dir.path().join("phones.csv").is_file());
        assert!(dir.path().join("invoices.csv").is_file());

        let loaded = shop.load().unwrap();
        let ids: Vec<_> = loaded.phones.get_all().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["P1", "P0"]);
        assert_eq!(loaded.customers.count(), 1);
        assert_eq!(loaded.employees.count(), 1);
        assert!(loaded.invoices.is_empty());
    }

    #[test]
    fn configured_file_names_are_used() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[files]\nphones = \"dien_thoai.csv\"\n").unwrap();
        let shop = Shop::open(dir.path()).unwrap();

        let mut registry = Registry::new();
        registry.phones.add(Phone::new("P1", "A", "Apple", 128, 10.0, 1, 2024));
        shop.save(&registry).unwrap();

        assert!(dir.path().join("dien_thoai.csv").is_file());
        assert!(!dir.path().join("phones.csv").exists());
    }

    #[test]
    fn failed_reload_keeps_registry() {
        let dir = TempDir::new().unwrap();
        let shop = Shop::init(dir.path()).unwrap();

        let mut registry = Registry::new();
        registry.phones.add(Phone::new("P1", "A", "Apple", 128, 10.0, 1, 2024));
        fs::write(dir.path().join("invoices.csv"), "broken row\n").unwrap();

        assert!(shop.reload(&mut registry).is_err());
        assert_eq!(registry.phones.count(), 1);
    }
}
