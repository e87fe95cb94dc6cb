use yieldboard_common::calc::YieldMetrics;
use yieldboard_common::{BrandRecord, BrandRepository, RepositoryError};

/// One brand with its computed yield figures.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandCard {
    pub record: BrandRecord,
    pub metrics: YieldMetrics,
}

impl BrandCard {
    pub fn new(record: BrandRecord) -> Self {
        let metrics = record.metrics();
        Self { record, metrics }
    }

    pub fn meets_target(&self) -> bool {
        self.metrics.meets_target()
    }
}

/// The displayed list of cards. Only a successful [`Board::refresh`] replaces it.
#[derive(Debug, Default)]
pub struct Board {
    cards: Vec<BrandCard>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[BrandCard] {
        &self.cards
    }

    /// Re-list every brand from `repo`. On failure the current cards stay as they are.
    pub async fn refresh<R: BrandRepository>(
        &mut self,
        repo: &R,
    ) -> Result<&[BrandCard], RepositoryError> {
        let mut records = repo.list_brands().await?;
        records.sort_by(|a, b| a.ticker_code.cmp(&b.ticker_code));
        self.cards = records.into_iter().map(BrandCard::new).collect();
        log::info!("Board refreshed: {} brands", self.cards.len());
        Ok(&self.cards)
    }
}
