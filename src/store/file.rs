//! # File-Backed Table
//!
//! The whole table lives in one JSON document, `<data_dir>/<table>.json`,
//! holding an array of records sorted by key. Every mutation rewrites the
//! document through a temp file that is synced to disk before it is renamed
//! over the old one, so a crash mid-write leaves the previous contents in
//! place.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::errors::{StoreError, StoreResult};
use super::PrayerStore;
use crate::model::{Prayer, PrayerId};

/// JSON-file prayer table
#[derive(Debug)]
pub struct FileTable {
    name: String,
    path: PathBuf,
    records: Mutex<BTreeMap<PrayerId, Prayer>>,
}

impl FileTable {
    /// Opens (or creates) the table file under `data_dir`.
    ///
    /// A missing file is an empty table. A file that cannot be parsed is
    /// reported as `StoreError::Corrupt` and left untouched.
    pub async fn open(data_dir: &Path, name: impl Into<String>) -> StoreResult<Self> {
        let name = name.into();
        fs::create_dir_all(data_dir).await?;
        let path = data_dir.join(format!("{}.json", name));

        let records = match fs::read(&path).await {
            Ok(bytes) => parse_table(&path, &bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(table = %name, records = records.len(), "table file loaded");

        Ok(Self {
            name,
            path,
            records: Mutex::new(records),
        })
    }

    /// Location of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, records: &BTreeMap<PrayerId, Prayer>) -> StoreResult<()> {
        let rows: Vec<&Prayer> = records.values().collect();
        let bytes = serde_json::to_vec_pretty(&rows)?;

        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

fn parse_table(path: &Path, bytes: &[u8]) -> StoreResult<BTreeMap<PrayerId, Prayer>> {
    let rows: Vec<Prayer> = serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupt {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(rows
        .into_iter()
        .map(|p| (p.prayer_id.clone(), p))
        .collect())
}

#[async_trait]
impl PrayerStore for FileTable {
    fn table_name(&self) -> &str {
        &self.name
    }

    async fn put(&self, prayer: &Prayer) -> StoreResult<()> {
        let mut records = self.records.lock().await;
        let previous = records.insert(prayer.prayer_id.clone(), prayer.clone());

        if let Err(e) = self.persist(&records).await {
            // Keep memory in line with what is on disk.
            match previous {
                Some(old) => records.insert(old.prayer_id.clone(), old),
                None => records.remove(&prayer.prayer_id),
            };
            return Err(e);
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Prayer>> {
        Ok(self.records.lock().await.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.lock().await;
        let Some(removed) = records.remove(id) else {
            return Ok(());
        };

        if let Err(e) = self.persist(&records).await {
            records.insert(removed.prayer_id.clone(), removed);
            return Err(e);
        }
        Ok(())
    }

    async fn scan(&self) -> StoreResult<Vec<Prayer>> {
        Ok(self.records.lock().await.values().cloned().collect())
    }
}
