use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Acknowledgment envelope returned by mutation endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traceback: Option<String>,
}

impl Ack {
    pub fn ok() -> Self {
        Ack {
            success: true,
            error: None,
            traceback: None,
        }
    }

    pub fn failed(error: &str) -> Self {
        Ack {
            success: false,
            error: Some(error.to_string()),
            traceback: None,
        }
    }

    /// Lenient parse of a response body. Returns `None` for bodies that do
    /// not carry the envelope at all (e.g. data endpoints); an envelope
    /// with malformed fields degrades to a failed ack rather than an error.
    pub fn from_body(body: &Value) -> Option<Ack> {
        let obj = body.as_object()?;
        if !obj.contains_key("success") {
            return None;
        }
        Some(serde_json::from_value(body.clone()).unwrap_or_default())
    }
}
