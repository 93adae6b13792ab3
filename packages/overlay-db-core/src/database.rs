//! Database container publishing immutable store snapshots.

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::DbConfig;
use crate::dataset::Dataset;
use crate::error::DbError;
use crate::repository::Repository;
use crate::store::RecordStore;

/// Result of a dataset import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// A new store was published
    Loaded { checksum: u32, records: usize },
    /// The dataset is already loaded
    Unchanged { checksum: u32 },
}

/// Holds the current record store.
///
/// Imports build a complete store first and then swap it in, so readers
/// see either the old or the new dataset, never a mix. Queries keep the
/// snapshot they were created with.
#[derive(Debug)]
pub struct Database {
    config: DbConfig,
    store: ArcSwap<RecordStore>,
}

impl Database {
    /// Creates a database with an empty store.
    pub fn new(config: DbConfig) -> Self {
        Self::with_store(config, RecordStore::default())
    }

    /// Creates a database serving an already built store.
    pub fn with_store(config: DbConfig, store: RecordStore) -> Self {
        Self {
            config,
            store: ArcSwap::from_pointee(store),
        }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Current store snapshot.
    pub fn store(&self) -> Arc<RecordStore> {
        self.store.load_full()
    }

    /// Replaces the current store.
    pub fn replace_store(&self, store: RecordStore) {
        self.store.store(Arc::new(store));
    }

    /// Imports a dataset, replacing the current store.
    ///
    /// # Returns
    /// `ImportOutcome::Unchanged` when a dataset with the same checksum is
    /// already loaded. On a validation error the current store stays in
    /// place.
    pub fn import(&self, dataset: Dataset) -> Result<ImportOutcome, DbError> {
        let checksum = dataset.checksum()?;
        if self.store.load().checksum() == Some(checksum) {
            tracing::info!("Dataset {:08x} already loaded, skipping import", checksum);
            return Ok(ImportOutcome::Unchanged { checksum });
        }

        let store = dataset.into_store_with_checksum(checksum).map_err(|e| {
            tracing::warn!("Rejected dataset {:08x}: {}", checksum, e);
            e
        })?;
        let records = store.entity_count();
        self.replace_store(store);

        tracing::info!("Loaded dataset {:08x} with {} records", checksum, records);
        Ok(ImportOutcome::Loaded { checksum, records })
    }

    /// Reads a dataset file and imports it.
    pub fn import_path(&self, path: &Path) -> Result<ImportOutcome, DbError> {
        let dataset = Dataset::from_path(path, self.config.max_dataset_size)?;
        self.import(dataset)
    }

    /// Repository over the current snapshot, with query defaults taken
    /// from the configuration.
    pub fn repository(&self) -> Repository {
        Repository::new(self.store(), self.config.query_settings())
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new(DbConfig::default())
    }
}
