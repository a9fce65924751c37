//! Error types for the simulator.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the simulator.
///
/// The first four variants are raised by input validation before a
/// simulation is ever built. The engine itself only raises
/// [`Error::InvalidArgument`].
#[derive(Debug, Error)]
pub enum Error {
    /// No pages were supplied.
    #[error("Reference string is empty")]
    EmptyReferenceString,

    /// A token in one of the page lists (or the frame count) is not a
    /// non-negative integer.
    #[error("Invalid {field}: '{token}' is not a number")]
    NonNumericToken { field: &'static str, token: String },

    /// Frame count outside the accepted bound.
    #[error("Frame count {count} is out of range ({min}-{max})")]
    FrameCountOutOfRange { count: usize, min: usize, max: usize },

    /// Reference string exceeds the accepted length.
    #[error("Reference string has {len} pages, at most {max} allowed")]
    ReferenceStringTooLong { len: usize, max: usize },

    /// The engine was handed input it cannot simulate.
    ///
    /// This indicates a caller bug: validation should have rejected it.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error while reading a request file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed request file.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
