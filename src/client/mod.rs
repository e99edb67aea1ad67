mod app;
mod builder;
mod columns;
mod http;
mod settings;
pub(crate) mod url;

pub use builder::ClientBuilder;
pub use http::HttpTransport;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::protocol::ClientError;

/// Request-issuing capability the typed client is built on: fetch a URL,
/// get a parsed JSON body back or an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value, ClientError>;
    async fn post(&self, url: &str, body: &Value) -> Result<Value, ClientError>;
}

/// Typed client for the D-Tale backend.
///
/// One async method per endpoint, each issuing exactly one request and
/// returning the parsed JSON body. Methods are grouped by concern across
/// `columns.rs`, `settings.rs` and `app.rs`.
pub struct DtaleClient {
    transport: Arc<dyn Transport>,
}

impl DtaleClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        DtaleClient { transport }
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}
