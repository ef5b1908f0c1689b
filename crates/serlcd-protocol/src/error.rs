/// Errors that can occur while encoding display operations.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The cursor row is not one of the device's four known rows.
    #[error("cursor row out of range (got {y}, expected 0-3)")]
    RowOutOfRange { y: i32 },

    /// The cursor column is negative.
    #[error("cursor column out of range (got {x}, must not be less than 0)")]
    ColumnOutOfRange { x: i32 },

    /// The backlight percentage is outside 0-100.
    #[error("backlight percentage out of range (got {percent}, expected 0-100)")]
    PercentOutOfRange { percent: i32 },

    /// The device has no working implementation of this operation.
    #[error("operation not supported: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
