//! # Store Gateway
//!
//! Thin pass-through to a single key-value table keyed by `prayerID`.
//! Handlers only ever talk to the `PrayerStore` trait; which table backs it
//! is decided once at startup from `StoreConfig`.

mod config;
mod errors;
mod file;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::model::Prayer;

pub use config::{StoreBackend, StoreConfig, DEFAULT_TABLE_NAME};
pub use errors::{StoreError, StoreResult};
pub use file::FileTable;
pub use memory::MemoryTable;

/// Key-value table holding prayers.
#[async_trait]
pub trait PrayerStore: Send + Sync {
    /// Name of the backing table
    fn table_name(&self) -> &str;

    /// Insert or fully overwrite the record keyed by its `prayer_id`
    async fn put(&self, prayer: &Prayer) -> StoreResult<()>;

    /// Fetch a record; `None` when the key does not exist
    async fn get(&self, id: &str) -> StoreResult<Option<Prayer>>;

    /// Remove a record; deleting an absent key is not an error
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Every record in the table, in unspecified order
    async fn scan(&self) -> StoreResult<Vec<Prayer>>;
}

/// Opens the table described by `config`.
pub async fn open_store(config: &StoreConfig) -> StoreResult<Arc<dyn PrayerStore>> {
    let store: Arc<dyn PrayerStore> = match config.backend {
        StoreBackend::Memory => Arc::new(MemoryTable::new(config.table_name.clone())),
        StoreBackend::File => {
            Arc::new(FileTable::open(&config.data_dir, config.table_name.clone()).await?)
        }
    };

    tracing::info!(
        table = %store.table_name(),
        backend = ?config.backend,
        "table opened"
    );

    Ok(store)
}
