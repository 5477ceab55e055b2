use thiserror::Error;

pub type Result<T> = std::result::Result<T, CanvasError>;

/// Message carried by [`CanvasError::InvalidArgument`] when a canvas is
/// requested with a zero or negative dimension.
pub const NON_POSITIVE_SIZE: &str = "width or height of the canvas cannot be 0 or less";

/// Errors raised by the canvas and its history stacks.
///
/// Both kinds are recoverable. A failed operation never leaves a partial
/// mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("position ({row},{col}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        row: i64,
        col: i64,
        width: usize,
        height: usize,
    },
}

impl CanvasError {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Whether a canvas was refused for a zero or negative dimension.
    #[must_use]
    pub fn is_non_positive_size(&self) -> bool {
        matches!(self, Self::InvalidArgument { message } if message == NON_POSITIVE_SIZE)
    }
}
