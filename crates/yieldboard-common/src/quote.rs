use crate::error::QuoteError;
use crate::model::PriceQuote;
use std::future::Future;

/// Resolves a ticker code to its current price & dividend.
///
/// One call per request; implementations neither cache nor retry.
pub trait QuoteSource {
    fn lookup_quote(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<PriceQuote, QuoteError>> + Send;
}
