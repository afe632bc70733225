use std::path::PathBuf;

/// Convenience result type used across the crate.
pub type RacetrackResult<T> = Result<T, RacetrackError>;

/// Error taxonomy for both conversion pipelines.
///
/// Every error is fatal for the invocation that produced it; nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum RacetrackError {
    /// Input image or buffer does not have the expected fixed dimensions.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A binary track or episode file does not match its byte layout.
    #[error("format mismatch: {0}")]
    FormatMismatch(String),

    /// A category value outside `0..=3` was encountered.
    #[error("category out of range: {0} (expected 0..=3)")]
    CategoryRange(u8),

    /// An episode position falls outside the 1-indexed grid.
    #[error("episode position {index} ({x}, {y}) is outside the grid (expected 1..=50)")]
    CoordinateOutOfRange {
        /// Record index inside the episode.
        index: usize,
        /// 1-indexed row coordinate.
        x: u8,
        /// 1-indexed column coordinate.
        y: u8,
    },

    /// A discretized track has no boundary cells.
    #[error("track has no boundary cells")]
    MissingBoundary,

    /// Missing or unreadable input, or unwritable output.
    #[error("io error on '{}': {source}", path.display())]
    Io {
        /// Path the failing operation was applied to.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RacetrackError {
    /// Build a [`RacetrackError::ShapeMismatch`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    /// Build a [`RacetrackError::FormatMismatch`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::FormatMismatch(msg.into())
    }

    /// Build a [`RacetrackError::Io`] value for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
