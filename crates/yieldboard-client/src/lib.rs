pub mod client_ext;
pub mod quote;

pub mod prelude {
    pub use crate::client_ext::couchdb::CouchRepository;
    pub use crate::client_ext::Client;
    pub use crate::quote::HttpQuoteSource;

    use std::time::Duration;

    /// Build the shared HTTP client; `timeout` bounds every request it sends.
    pub fn build_client(user_agent: &str, timeout: Duration) -> reqwest::Result<Client> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(client)
    }
}
