//! D-Tale Rust Client
//!
//! Client-side state synchronization for the D-Tale tabular data viewer
//! backend. Grid operations (reordering, pinning, hiding, renaming,
//! formatting columns; editing cells; toggling UI preferences) become HTTP
//! calls against `/dtale/<operation>` endpoints, with the local view state
//! patched optimistically before the server answers.
//!
//! # Example
//!
//! ```rust,no_run
//! use dtale_client::{ClientBuilder, ThemeVariant};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dtale_client::ClientError> {
//!     let client = ClientBuilder::new("http://localhost:40000")
//!         .timeout_ms(5000)
//!         .build_http()?;
//!
//!     client.rename_column("1", "price", "unit_price").await?;
//!     client.update_theme(ThemeVariant::Dark).await?;
//!     Ok(())
//! }
//! ```
//!
//! For fire-and-forget persistence with optimistic local updates, see
//! [`sync::SyncDispatcher`].

pub mod arrange;
pub mod client;
pub mod protocol;
pub mod sync;

pub use arrange::{Arrangement, PersistSpec};
pub use client::{ClientBuilder, DtaleClient, HttpTransport, Transport};
pub use protocol::{
    Ack, ClientError, ColumnDef, ColumnFormat, LockAction, MoveDirection, MoveEdge,
    PositionAction, QueryEngine, ThemeVariant,
};
pub use sync::{Completion, StateSink, SyncDispatcher, ViewPatch};
