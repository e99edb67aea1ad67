use std::sync::Arc;

use super::http::HttpTransport;
use super::DtaleClient;
use crate::protocol::ClientError;

/// Builds a [`DtaleClient`] with an explicitly injected base URL.
///
/// ```rust,no_run
/// # use dtale_client::ClientBuilder;
/// # fn main() -> Result<(), dtale_client::ClientError> {
/// let client = ClientBuilder::new("http://localhost:40000")
///     .timeout_ms(5000)
///     .build_http()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: String,
    timeout_ms: u64,
    pool_size: usize,
}

impl ClientBuilder {
    pub fn new(base_url: &str) -> Self {
        ClientBuilder {
            base_url: base_url.to_string(),
            timeout_ms: 30_000,
            pool_size: 16,
        }
    }

    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = ms;
        self
    }

    pub fn pool_size(mut self, size: usize) -> Self {
        self.pool_size = size;
        self
    }

    pub fn build_http(self) -> Result<DtaleClient, ClientError> {
        let transport = HttpTransport::configure(&self.base_url, self.timeout_ms, self.pool_size)?;
        Ok(DtaleClient::new(Arc::new(transport)))
    }
}
