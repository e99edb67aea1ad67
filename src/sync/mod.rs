//! Grid state synchronization.
//!
//! Ties the arrangement engine, the view-state container and the typed
//! client together: each grid operation applies its optimistic local patch
//! and fires exactly one persistence request at the backend.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use dtale_client::{ClientBuilder, MoveDirection, StateSink, SyncDispatcher, ViewPatch};
//!
//! struct GridState;
//!
//! #[async_trait]
//! impl StateSink for GridState {
//!     async fn apply(&self, _patch: ViewPatch) {
//!         // merge into the authoritative UI state
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dtale_client::ClientError> {
//!     let client = ClientBuilder::new("http://localhost:40000").build_http()?;
//!     let dispatcher = SyncDispatcher::new(Arc::new(client), Arc::new(GridState));
//!
//!     let columns = vec![
//!         dtale_client::ColumnDef::new("a"),
//!         dtale_client::ColumnDef::new("b"),
//!     ];
//!     if let Some(completion) = dispatcher.move_one("1", &columns, "b", MoveDirection::Left).await {
//!         completion.settled().await;
//!     }
//!     Ok(())
//! }
//! ```

pub mod dispatcher;
pub mod state;

pub use dispatcher::{Completion, SyncDispatcher};
pub use state::{StateSink, ViewPatch};
