use yieldboard_client::prelude::CouchRepository;
use yieldboard_common::{
    BrandRecord, BrandRepository, JsonFileRepository, MemoryRepository, RepositoryError,
};

/// The brand store picked at startup.
#[derive(Debug)]
pub enum Store {
    Couch(CouchRepository),
    File(JsonFileRepository),
    Memory(MemoryRepository),
}

impl Store {
    /// Where the brands live, for log lines.
    pub fn describe(&self) -> String {
        match self {
            Store::Couch(repo) => format!("CouchDB at {}", repo.db_url()),
            Store::File(repo) => format!("file {}", repo.path().display()),
            Store::Memory(_) => "memory".to_string(),
        }
    }
}

impl BrandRepository for Store {
    async fn list_brands(&self) -> Result<Vec<BrandRecord>, RepositoryError> {
        match self {
            Store::Couch(repo) => repo.list_brands().await,
            Store::File(repo) => repo.list_brands().await,
            Store::Memory(repo) => repo.list_brands().await,
        }
    }

    async fn upsert_brand(&self, record: &BrandRecord) -> Result<(), RepositoryError> {
        match self {
            Store::Couch(repo) => repo.upsert_brand(record).await,
            Store::File(repo) => repo.upsert_brand(record).await,
            Store::Memory(repo) => repo.upsert_brand(record).await,
        }
    }
}
