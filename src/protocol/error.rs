use thiserror::Error;

/// Errors surfaced by the transport and typed client.
///
/// The sync dispatcher never lets these escape to callers; they are logged
/// and swallowed at that boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
