use crate::geo::datum::Datum;
use crate::geo::projection::Projection;
use crate::point::{CartesianPoint2d, GeoPoint, NewCartesianPoint2d, NewGeoPoint};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::marker::PhantomData;

/// Spherical Web Mercator (EPSG:3857).
///
/// Projects geographic points into metres using the datum's semimajor axis as the sphere
/// radius. `unproject` is the inverse:
///
/// * `lon = x / R`
/// * `lat = 2 * atan(exp(y / R)) - PI / 2`
///
/// The inverse does not check the domain of its input, so positions far outside of
/// `|lat| < 85.06` still produce finite (if meaningless) values.
#[derive(Debug, Copy, Clone)]
pub struct WebMercator<In, Out> {
    datum: Datum,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> WebMercator<In, Out> {
    /// Creates the projection on the given datum.
    pub fn new(datum: Datum) -> Self {
        Self {
            datum,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }

    /// Datum used by the projection.
    pub fn datum(&self) -> Datum {
        self.datum
    }
}

impl<In, Out> Default for WebMercator<In, Out> {
    fn default() -> Self {
        Self::new(Datum::WGS84)
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection for WebMercator<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let x = self.datum.semimajor() * input.lon_rad();
        let y = self.datum.semimajor() * (FRAC_PI_4 + input.lat_rad() / 2.0).tan().ln();

        if x.is_finite() && y.is_finite() {
            Some(Self::OutPoint::new(x, y))
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let lon = input.x() / self.datum.semimajor();
        let lat = 2.0 * (input.y() / self.datum.semimajor()).exp().atan() - FRAC_PI_2;

        Some(Self::InPoint::latlon(lat.to_degrees(), lon.to_degrees()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{GeoPoint2d, Point2d};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const R: f64 = 6_378_137.0;
    // Half of the equator length in metres, the x extent of EPSG:3857.
    const MAX_X: f64 = 20_037_508.342_789_244;

    fn projection() -> WebMercator<GeoPoint2d, Point2d> {
        WebMercator::default()
    }

    #[test]
    fn origin_maps_to_origin() {
        let geo = projection().unproject(&Point2d::new(0.0, 0.0)).unwrap();
        assert_eq!(geo.lat(), 0.0);
        assert_eq!(geo.lon(), 0.0);
    }

    #[test]
    fn equator_has_zero_latitude() {
        for x in [-MAX_X, -1_234_567.0, -1.0, 0.5, 250_000.0, 7_000_000.0, MAX_X] {
            let geo = projection().unproject(&Point2d::new(x, 0.0)).unwrap();
            assert_abs_diff_eq!(geo.lat(), 0.0, epsilon = 1e-12);
            assert_relative_eq!(geo.lon(), (x / R).to_degrees(), epsilon = 1e-12);
        }
    }

    #[test]
    fn extent_edges() {
        let geo = projection().unproject(&Point2d::new(MAX_X, MAX_X)).unwrap();
        assert_abs_diff_eq!(geo.lon(), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(geo.lat(), 85.051_128_779_806_6, epsilon = 1e-9);

        let geo = projection().unproject(&Point2d::new(-MAX_X, -MAX_X)).unwrap();
        assert_abs_diff_eq!(geo.lon(), -180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(geo.lat(), -85.051_128_779_806_6, epsilon = 1e-9);
    }

    #[test]
    fn london() {
        let projected = Point2d::new(-14_221.96, 6_711_533.71);
        let geo = projection().unproject(&projected).unwrap();
        assert_abs_diff_eq!(geo.lon(), -0.127_758, epsilon = 1e-5);
        assert_abs_diff_eq!(geo.lat(), 51.507_351, epsilon = 1e-5);
    }

    #[test]
    fn round_trip() {
        let points = [
            Point2d::new(0.0, 0.0),
            Point2d::new(-14_221.96, 6_711_533.71),
            Point2d::new(-820_000.0, 8_500_000.0),
            Point2d::new(19_000_000.0, -15_000_000.0),
        ];

        for point in points {
            let geo = projection().unproject(&point).unwrap();
            let back = projection().project(&geo).unwrap();
            assert_abs_diff_eq!(back, point, epsilon = 1e-6);
        }
    }

    #[test]
    fn out_of_domain_input_is_not_rejected() {
        let geo = projection()
            .unproject(&Point2d::new(3.0 * MAX_X, 5.0 * MAX_X))
            .unwrap();
        assert!(geo.lon().is_finite());
        assert!(geo.lat().is_finite());
        assert_abs_diff_eq!(geo.lon(), 540.0, epsilon = 1e-9);
    }

    #[test]
    fn non_finite_projection_result() {
        assert!(projection()
            .project(&GeoPoint2d::latlon(f64::NAN, 0.0))
            .is_none());
    }
}
