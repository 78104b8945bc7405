//! Reprojects a GeoJSON document from Web Mercator (EPSG:3857) to WGS84 (EPSG:4326).
//!
//! The whole document is loaded into memory, every geometry is reprojected with
//! [`reproj_types::geojson::Reproject`], the legacy `crs` member is removed (GeoJSON without
//! it is WGS84 by definition) and the result is written in one go.
//!
//! ```no_run
//! use reproj::{run, ReprojectConfig};
//!
//! let summary = run(&ReprojectConfig::default().with_output("out.geojson")).unwrap();
//! println!("{} features reprojected", summary.features);
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;

pub use config::{CrsMismatchPolicy, ReprojectConfig};
pub use error::ReprojectError;
pub use pipeline::{reproject_document, run, ReprojectSummary};
