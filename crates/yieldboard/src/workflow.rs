//! Registering a brand: validate, look up its quote, store it, re-list.
//!
//! ```text
//! Idle ─submit─▶ Submitting ─quote + upsert ok─▶ Idle (record returned)
//!                    └─────any failure──────▶ Idle (error returned)
//! ```
use crate::board::{Board, BrandCard};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use yieldboard_common::form::{RegistrationForm, ValidationErrors};
use yieldboard_common::{BrandRecord, BrandRepository, QuoteError, QuoteSource, RepositoryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Submitting,
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    #[error("a registration is already being submitted")]
    InFlight,

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Store(#[from] RepositoryError),

    /// The brand was written but re-listing the store failed.
    #[error("brand {code} was saved, but the board could not be refreshed: {source}")]
    Refresh { code: String, source: RepositoryError },
}

/// Runs one registration at a time against a quote source & a brand store.
pub struct Registrar<Q, R> {
    quotes: Q,
    repo: R,
    submitting: AtomicBool,
}

/// Held for the duration of a submission; dropping it returns to `Idle`.
struct Submitting<'a>(&'a AtomicBool);

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<Q: QuoteSource, R: BrandRepository> Registrar<Q, R> {
    pub fn new(quotes: Q, repo: R) -> Self {
        Self {
            quotes,
            repo,
            submitting: AtomicBool::new(false),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn state(&self) -> WorkflowState {
        if self.submitting.load(Ordering::Acquire) {
            WorkflowState::Submitting
        } else {
            WorkflowState::Idle
        }
    }

    /// Validate `form`, fetch the ticker's quote and upsert the combined record.
    ///
    /// Nothing is written unless both steps succeed. Failures are logged and
    /// returned; there is no retry.
    pub async fn submit(
        &self,
        form: &RegistrationForm,
    ) -> Result<BrandRecord, RegistrationError> {
        let registration = form.validate()?;
        let _submitting = self.begin()?;
        let code = registration.stock_code.as_str();
        log::info!("Registering {} ({code})", registration.brand);

        let quote = self
            .quotes
            .lookup_quote(code)
            .await
            .inspect_err(|e| log::error!("Quote lookup failed: {e}"))?;

        let record = BrandRecord::new(
            &registration.brand,
            code,
            registration.desired_yield,
            quote,
        );
        self.repo
            .upsert_brand(&record)
            .await
            .inspect_err(|e| log::error!("Brand upsert failed: {e}"))?;

        log::info!("Registered {} ({code})", record.brand_name);
        Ok(record)
    }

    fn begin(&self) -> Result<Submitting<'_>, RegistrationError> {
        self.submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| RegistrationError::InFlight)?;
        Ok(Submitting(&self.submitting))
    }
}

/// The registrar plus the board it keeps current.
pub struct Dashboard<Q, R> {
    registrar: Registrar<Q, R>,
    board: Board,
}

impl<Q: QuoteSource, R: BrandRepository> Dashboard<Q, R> {
    pub fn new(quotes: Q, repo: R) -> Self {
        Self {
            registrar: Registrar::new(quotes, repo),
            board: Board::new(),
        }
    }

    pub fn registrar(&self) -> &Registrar<Q, R> {
        &self.registrar
    }

    pub fn cards(&self) -> &[BrandCard] {
        self.board.cards()
    }

    /// Re-list the store into the board.
    pub async fn refresh(&mut self) -> Result<&[BrandCard], RepositoryError> {
        self.board
            .refresh(self.registrar.repository())
            .await
            .inspect_err(|e| log::error!("Listing brands failed: {e}"))
    }

    /// Submit `form`, then re-list so the board shows the stored state.
    pub async fn register(
        &mut self,
        form: &RegistrationForm,
    ) -> Result<BrandRecord, RegistrationError> {
        let record = self.registrar.submit(form).await?;
        if let Err(source) = self.refresh().await {
            return Err(RegistrationError::Refresh {
                code: record.ticker_code,
                source,
            });
        }
        Ok(record)
    }
}
