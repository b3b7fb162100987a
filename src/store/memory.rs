//! # In-Memory Table
//!
//! Process-local table. Used as the default backend and as the fake store
//! in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::config::DEFAULT_TABLE_NAME;
use super::errors::StoreResult;
use super::PrayerStore;
use crate::model::{Prayer, PrayerId};

/// In-memory prayer table
#[derive(Debug)]
pub struct MemoryTable {
    name: String,
    records: RwLock<HashMap<PrayerId, Prayer>>,
}

impl MemoryTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for MemoryTable {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_NAME)
    }
}

#[async_trait]
impl PrayerStore for MemoryTable {
    fn table_name(&self) -> &str {
        &self.name
    }

    async fn put(&self, prayer: &Prayer) -> StoreResult<()> {
        self.records
            .write()
            .await
            .insert(prayer.prayer_id.clone(), prayer.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Prayer>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.records.write().await.remove(id);
        Ok(())
    }

    async fn scan(&self) -> StoreResult<Vec<Prayer>> {
        Ok(self.records.read().await.values().cloned().collect())
    }
}
