//! Loaded shop state for one command

use std::path::Path;

use anyhow::Result;

use crate::analytics::Analytics;
use crate::manager::Registry;
use crate::storage::Shop;

/// A shop together with its records, loaded once per command
pub struct Session {
    shop: Shop,
    registry: Registry,
}

impl Session {
    /// Opens the shop at `data_dir` and reads every entity file
    pub fn open(data_dir: &Path) -> Result<Self> {
        let shop = Shop::open(data_dir)?;
        let registry = shop.load()?;
        Ok(Self { shop, registry })
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn analytics(&self) -> Analytics<'_> {
        self.registry.analytics()
    }

    /// Writes every entity file back to disk
    pub fn save(&self) -> Result<()> {
        self.shop.save(&self.registry)
    }
}
