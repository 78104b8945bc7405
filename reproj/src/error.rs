//! Error types used by the crate.

use reproj_types::ReprojTypesError;
use std::path::PathBuf;
use thiserror::Error;

/// Reprojection error type.
#[derive(Debug, Error)]
pub enum ReprojectError {
    /// Error reading or writing a file.
    #[error("failed to access {path}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Input is not a valid GeoJSON document.
    #[error("failed to parse GeoJSON")]
    Parse(#[from] geojson::Error),
    /// A geometry could not be reprojected.
    #[error("failed to reproject geometry of feature {feature}")]
    Geometry {
        /// Index of the feature in the collection. 0 for a bare geometry and for the
        /// collection bounding box.
        feature: usize,
        /// Underlying error.
        #[source]
        source: ReprojTypesError,
    },
    /// Error serializing the output document.
    #[error("failed to serialize GeoJSON")]
    Serialize(#[from] serde_json::Error),
    /// No projection exists between the configured systems.
    #[error("reprojection from EPSG:{source_epsg} to EPSG:{target_epsg} is not supported")]
    UnsupportedCrs {
        /// Source EPSG code.
        source_epsg: u32,
        /// Target EPSG code.
        target_epsg: u32,
    },
    /// The document declares a CRS different from the configured source.
    #[error("document declares CRS {declared:?}, expected EPSG:{expected}")]
    CrsMismatch {
        /// Declared CRS name, `None` if the `crs` member has no name.
        declared: Option<String>,
        /// EPSG code of the configured source CRS.
        expected: u32,
    },
}

impl ReprojectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
