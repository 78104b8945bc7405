//! Types used to move GeoJSON geometries between coordinate reference systems.
//!
//! The crate has three parts:
//! * [`point`] - geographic ([`GeoPoint`]) and Cartesian ([`CartesianPoint2d`]) point traits;
//! * [`geo`] - datums, CRS descriptions and [`geo::Projection`] implementations;
//! * [`geojson`] - structural walker that applies a projection to every position of a
//!   [`::geojson::Geometry`].

pub mod error;
pub mod geo;
pub mod geojson;
pub mod point;

pub use error::ReprojTypesError;
pub use point::{
    CartesianPoint2d, GeoPoint, GeoPoint2d, NewCartesianPoint2d, NewGeoPoint, Point2d,
    PositionPoint,
};
