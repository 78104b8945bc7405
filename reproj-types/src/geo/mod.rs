//! Coordinate reference systems and conversion between them (see [`Projection`]).

mod crs;
mod datum;
mod projection;
mod web_mercator;

pub use crs::{Crs, ProjectionType};
pub use datum::Datum;
pub use projection::{InvertedProjection, Projection};
pub use web_mercator::WebMercator;
