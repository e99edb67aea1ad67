#![allow(dead_code)]

//! Common test utilities
//!
//! Provides shared helpers for:
//! - A scripted, recording transport standing in for the network
//! - A state sink capturing applied view patches
//! - Column fixtures

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use dtale_client::{ClientError, ColumnDef, StateSink, Transport, ViewPatch};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

/// Records every request and answers from a script, falling back to a
/// success ack (or a simulated outage when constructed with `failing`).
pub struct MockTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    queue: Mutex<Vec<Result<Value, ClientError>>>,
    fail_all: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport {
            requests: Mutex::new(Vec::new()),
            queue: Mutex::new(Vec::new()),
            fail_all: false,
        }
    }

    pub fn failing() -> Self {
        MockTransport {
            fail_all: true,
            ..Self::new()
        }
    }

    pub fn scripted(responses: Vec<Result<Value, ClientError>>) -> Self {
        MockTransport {
            queue: Mutex::new(responses),
            ..Self::new()
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self) -> Result<Value, ClientError> {
        if self.fail_all {
            return Err(ClientError::Connection("simulated outage".to_string()));
        }
        let mut queue = self.queue.lock().unwrap();
        if queue.is_empty() {
            Ok(json!({"success": true}))
        } else {
            queue.remove(0)
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<Value, ClientError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            body: None,
        });
        self.respond()
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, ClientError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            body: Some(body.clone()),
        });
        self.respond()
    }
}

/// Captures applied patches instead of holding real view state.
pub struct CapturingSink {
    patches: Mutex<Vec<ViewPatch>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        CapturingSink {
            patches: Mutex::new(Vec::new()),
        }
    }

    pub fn patches(&self) -> Vec<ViewPatch> {
        self.patches.lock().unwrap().clone()
    }
}

#[async_trait]
impl StateSink for CapturingSink {
    async fn apply(&self, patch: ViewPatch) {
        self.patches.lock().unwrap().push(patch);
    }
}

pub fn cols(names: &[&str]) -> Vec<ColumnDef> {
    names.iter().map(|n| ColumnDef::new(n)).collect()
}

pub fn names(columns: &[ColumnDef]) -> Vec<String> {
    columns.iter().map(|c| c.name.clone()).collect()
}

/// Asserts the locked-prefix invariant: no locked column after an
/// unlocked one.
pub fn assert_partitioned(columns: &[ColumnDef]) {
    let first_unlocked = columns.iter().position(|c| !c.locked);
    if let Some(boundary) = first_unlocked {
        assert!(
            columns[boundary..].iter().all(|c| !c.locked),
            "locked column after unlocked region: {:?}",
            names(columns)
        );
    }
}
