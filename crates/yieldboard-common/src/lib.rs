//! Shared types for yieldboard: the brand model, the yield calculator, the
//! registration form schema and the storage/quote seams.
//! ```rust
//! use yieldboard_common::calc::YieldMetrics;
//!
//! let metrics = YieldMetrics::compute(1000.0, 25.0, 3.0);
//! assert_eq!(metrics.realized_yield, Some(2.5));
//! assert_eq!(metrics.target_price, Some(833.3));
//! ```
pub mod calc;
pub mod error;
pub mod form;
pub mod fs;
pub mod model;
pub mod quote;
pub mod repo;

pub use crate::error::{BoxError, QuoteError, RepositoryError};
pub use crate::model::{BrandRecord, PriceQuote};
pub use crate::quote::QuoteSource;
pub use crate::repo::{BrandRepository, JsonFileRepository, MemoryRepository};
