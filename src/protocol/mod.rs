//! Wire-level definitions shared by the client and dispatcher.

pub mod error;
pub mod response;
pub mod types;

pub use error::ClientError;
pub use response::Ack;
pub use types::{
    ColumnDef, ColumnFormat, LockAction, MoveDirection, MoveEdge, PositionAction, QueryEngine,
    ThemeVariant,
};
