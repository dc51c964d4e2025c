//! Error types for preference codec operations

use thiserror::Error;

/// Error type for preference decoding.
#[derive(Debug, Error)]
pub enum Error {
    /// The content could not be parsed as a preference map.
    ///
    /// Truncated and corrupted content are not distinguished; the underlying
    /// parse failure is carried for diagnostics only.
    #[error("malformed content: {0}")]
    MalformedContent(#[from] prost::DecodeError),
}
