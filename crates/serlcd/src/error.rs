use serlcd_protocol::ProtocolError;

/// Errors surfaced by the driver facade.
///
/// Validation and unsupported-operation failures are returned synchronously,
/// before anything is queued. Transport failures inside the pacer are logged
/// and dropped there; [`LcdError::Io`] only reaches callers from the
/// synchronous paths (construction and reset).
#[derive(Debug, thiserror::Error)]
pub enum LcdError {
    /// An operation was rejected at encode time.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// An I/O error on the transport.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LcdError>;
