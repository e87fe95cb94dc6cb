use reqwest::Client;
use yieldboard_common::{PriceQuote, QuoteError, QuoteSource};

/// Quote lookup against `GET {base_url}/api/stock?code=<code>`, which answers
/// `{ "stockPrice": 2450, "dividend": 94 }`.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: Client,
    base_url: String,
}

impl HttpQuoteSource {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/stock", self.base_url)
    }
}

/// Parse a quote response body for `code`.
pub fn parse_quote(code: &str, body: &str) -> Result<PriceQuote, QuoteError> {
    serde_json::from_str(body).map_err(|e| QuoteError::Malformed {
        code: code.to_string(),
        reason: e.to_string(),
    })
}

impl QuoteSource for HttpQuoteSource {
    async fn lookup_quote(&self, code: &str) -> Result<PriceQuote, QuoteError> {
        let request_error = |e: reqwest::Error| QuoteError::Request {
            code: code.to_string(),
            reason: e.into(),
        };

        log::debug!("Requesting quote for {code}");
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("code", code)])
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status {
                code: code.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(request_error)?;
        let quote = parse_quote(code, &body)?;
        log::debug!(
            "Quote for {code}: price {}, dividend {}",
            quote.current_price,
            quote.dividend
        );
        Ok(quote)
    }
}
