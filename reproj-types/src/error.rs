//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReprojTypesError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// Projection did not produce a result for the given position.
    #[error("failed to project position ({x}, {y})")]
    Projection {
        /// First ordinate of the input position.
        x: f64,
        /// Second ordinate of the input position.
        y: f64,
    },
}
