use crate::calc::YieldMetrics;
use serde::{Deserialize, Serialize};

/// A single tracked brand, as stored in the `stocks` collection.
/// ```json
/// {
///     "brand": "Orix",
///     "stockCode": "8591",
///     "desiredYield": 4.0,
///     "stockPrice": 2450.0,
///     "dividend": 94.0
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrandRecord {
    #[serde(rename = "brand")]
    pub brand_name: String,

    #[serde(rename = "stockCode")]
    pub ticker_code: String,

    pub desired_yield: f64,

    #[serde(rename = "stockPrice")]
    pub current_price: f64,

    pub dividend: f64,
}

impl BrandRecord {
    pub fn new(brand_name: &str, ticker_code: &str, desired_yield: f64, quote: PriceQuote) -> Self {
        Self {
            brand_name: brand_name.to_string(),
            ticker_code: ticker_code.to_string(),
            desired_yield,
            current_price: quote.current_price,
            dividend: quote.dividend,
        }
    }

    pub fn metrics(&self) -> YieldMetrics {
        YieldMetrics::compute(self.current_price, self.dividend, self.desired_yield)
    }
}

/// Price & dividend for one ticker, as served by `/api/stock?code=<code>`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    #[serde(rename = "stockPrice")]
    pub current_price: f64,
    pub dividend: f64,
}
