//! Run configuration.

use reproj_types::geo::Crs;
use std::path::{Path, PathBuf};

/// Input file the binary reads.
pub const DEFAULT_INPUT: &str = "ukca-area-boundaries-simple.geojson";
/// Output file the binary writes.
pub const DEFAULT_OUTPUT: &str = "uk.geojson";

/// What to do when the document declares a CRS other than the configured source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CrsMismatchPolicy {
    /// Log a warning and reproject as if the declaration matched.
    #[default]
    Warn,
    /// Abort with [`ReprojectError::CrsMismatch`](crate::ReprojectError::CrsMismatch).
    Fail,
}

/// Parameters of a reprojection run.
///
/// The default value is what the binary uses: fixed file names in the working directory,
/// EPSG:3857 to EPSG:4326.
#[derive(Debug, Clone)]
pub struct ReprojectConfig {
    input: PathBuf,
    output: PathBuf,
    source: Crs,
    target: Crs,
    crs_mismatch: CrsMismatchPolicy,
}

impl Default for ReprojectConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            source: Crs::EPSG3857,
            target: Crs::WGS84,
            crs_mismatch: CrsMismatchPolicy::default(),
        }
    }
}

impl ReprojectConfig {
    /// Sets the input path.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Sets the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the CRS the input coordinates are assumed to be in.
    pub fn with_source(mut self, source: Crs) -> Self {
        self.source = source;
        self
    }

    /// Sets the CRS of the output coordinates.
    pub fn with_target(mut self, target: Crs) -> Self {
        self.target = target;
        self
    }

    /// Sets the policy for a declared CRS that differs from the source.
    pub fn with_crs_mismatch(mut self, policy: CrsMismatchPolicy) -> Self {
        self.crs_mismatch = policy;
        self
    }

    /// Input path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Source CRS.
    pub fn source(&self) -> &Crs {
        &self.source
    }

    /// Target CRS.
    pub fn target(&self) -> &Crs {
        &self.target
    }

    /// Declared CRS mismatch policy.
    pub fn crs_mismatch(&self) -> CrsMismatchPolicy {
        self.crs_mismatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ReprojectConfig::default();
        assert_eq!(config.input(), Path::new("ukca-area-boundaries-simple.geojson"));
        assert_eq!(config.output(), Path::new("uk.geojson"));
        assert_eq!(config.source(), &Crs::EPSG3857);
        assert_eq!(config.target(), &Crs::WGS84);
        assert_eq!(config.crs_mismatch(), CrsMismatchPolicy::Warn);
    }

    #[test]
    fn builder() {
        let config = ReprojectConfig::default()
            .with_input("in.json")
            .with_output("out.json")
            .with_crs_mismatch(CrsMismatchPolicy::Fail);
        assert_eq!(config.input(), Path::new("in.json"));
        assert_eq!(config.output(), Path::new("out.json"));
        assert_eq!(config.crs_mismatch(), CrsMismatchPolicy::Fail);
    }
}
