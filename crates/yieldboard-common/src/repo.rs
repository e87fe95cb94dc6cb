use crate::error::RepositoryError;
use crate::fs;
use crate::model::BrandRecord;
use std::collections::BTreeMap;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Storage for brand records, keyed by ticker code.
///
/// The workflow only ever needs the two operations below, so any store able
/// to list a collection and overwrite a keyed document can back it.
pub trait BrandRepository {
    /// Every stored record. Order carries no meaning.
    fn list_brands(
        &self,
    ) -> impl Future<Output = Result<Vec<BrandRecord>, RepositoryError>> + Send;

    /// Write `record` under its ticker code, replacing any previous record whole.
    fn upsert_brand(
        &self,
        record: &BrandRecord,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

/// Process-local store, used for dry runs & tests.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: RwLock<BTreeMap<String, BrandRecord>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = BrandRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.ticker_code.clone(), record))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }
}

impl BrandRepository for MemoryRepository {
    async fn list_brands(&self) -> Result<Vec<BrandRecord>, RepositoryError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn upsert_brand(&self, record: &BrandRecord) -> Result<(), RepositoryError> {
        self.records
            .write()
            .await
            .insert(record.ticker_code.clone(), record.clone());
        Ok(())
    }
}

/// Single JSON file holding one object of records keyed by ticker code.
/// ```json
/// {
///     "8591": { "brand": "Orix", "stockCode": "8591", ... },
///     "9432": { "brand": "NTT", "stockCode": "9432", ... }
/// }
/// ```
/// A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> std::io::Result<BTreeMap<String, BrandRecord>> {
        match fs::read_json(&self.path).await {
            Ok(records) => Ok(records),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e),
        }
    }
}

impl BrandRepository for JsonFileRepository {
    async fn list_brands(&self) -> Result<Vec<BrandRecord>, RepositoryError> {
        let records = self
            .load()
            .await
            .map_err(|e| RepositoryError::Unavailable(e.into()))?;
        log::debug!("Read {} brands from {}", records.len(), self.path.display());
        Ok(records.into_values().collect())
    }

    async fn upsert_brand(&self, record: &BrandRecord) -> Result<(), RepositoryError> {
        let code = &record.ticker_code;
        let write_error = |e: std::io::Error| RepositoryError::Write {
            code: code.clone(),
            reason: e.into(),
        };

        let mut records = self.load().await.map_err(write_error)?;
        records.insert(code.clone(), record.clone());
        fs::write_json(&self.path, &records)
            .await
            .map_err(write_error)?;
        log::debug!("Wrote brand {code} to {}", self.path.display());
        Ok(())
    }
}
