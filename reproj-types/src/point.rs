//! Point traits and the two concrete point types the projections work with.

use nalgebra::{Point2, Scalar};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Point on the surface of the ellipsoid, in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// Geo point that can be constructed from its latitude and longitude.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;

    /// Same as [`NewGeoPoint::latlon`] with the arguments in GeoJSON order.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

/// Point in a projected (planar) coordinate system.
pub trait CartesianPoint2d {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// X coordinate (easting).
    fn x(&self) -> Self::Num;
    /// Y coordinate (northing).
    fn y(&self) -> Self::Num;
}

/// Cartesian point that can be constructed from its coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}

/// Cartesian point with `f64` coordinates.
pub type Point2d = Point2<f64>;

impl<Num: Float + Scalar> CartesianPoint2d for Point2<Num> {
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: Float + Scalar> NewCartesianPoint2d<Num> for Point2<Num> {
    fn new(x: Num, y: Num) -> Self {
        Point2::new(x, y)
    }
}

/// 2d point on the surface of the ellipsoid.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Point that occupies the first two ordinates of a GeoJSON position.
///
/// GeoJSON always stores the easting/longitude first, so geographic points read and write
/// `[lon, lat]` and Cartesian points read and write `[x, y]`.
pub trait PositionPoint: Sized {
    /// Creates a point from the first two ordinates of a position.
    fn from_ordinates(first: f64, second: f64) -> Self;
    /// Returns the ordinates in position order.
    fn ordinates(&self) -> [f64; 2];
}

impl PositionPoint for GeoPoint2d {
    fn from_ordinates(first: f64, second: f64) -> Self {
        Self::lonlat(first, second)
    }

    fn ordinates(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl PositionPoint for Point2d {
    fn from_ordinates(first: f64, second: f64) -> Self {
        Point2d::new(first, second)
    }

    fn ordinates(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}
