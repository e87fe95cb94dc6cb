use thiserror::Error;

/// Backend-specific failure carried inside the error enums below.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by a [`BrandRepository`](crate::repo::BrandRepository) backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store could not be reached, or its listing could not be read.
    #[error("brand store unavailable: {0}")]
    Unavailable(BoxError),

    /// A single upsert failed; nothing was written.
    #[error("failed to write brand {code}: {reason}")]
    Write { code: String, reason: BoxError },
}

/// Errors raised by a [`QuoteSource`](crate::quote::QuoteSource).
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("quote request for {code} failed: {reason}")]
    Request { code: String, reason: BoxError },

    /// The quote source answered with a non-success status.
    #[error("quote source returned {status} for {code}")]
    Status { code: String, status: u16 },

    /// The response body was not a `{ stockPrice, dividend }` object.
    #[error("malformed quote for {code}: {reason}")]
    Malformed { code: String, reason: String },
}
