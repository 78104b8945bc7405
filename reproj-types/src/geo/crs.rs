use crate::geo::datum::Datum;
use crate::geo::projection::Projection;
use crate::geo::web_mercator::WebMercator;
use crate::point::{NewCartesianPoint2d, NewGeoPoint};

/// Coordinate reference system description.
#[derive(Debug, Clone, PartialEq)]
pub struct Crs {
    datum: Datum,
    projection_type: ProjectionType,
}

/// Projection used by a [`Crs`] to get from geographic to its own coordinates.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProjectionType {
    /// Geographic coordinates, no projection.
    None,
    /// Spherical Web Mercator.
    WebMercator,
}

impl Crs {
    /// Geographic longitude/latitude on WGS84.
    pub const WGS84: Crs = Crs {
        datum: Datum::WGS84,
        projection_type: ProjectionType::None,
    };

    /// Spherical Web Mercator on WGS84.
    pub const EPSG3857: Crs = Crs {
        datum: Datum::WGS84,
        projection_type: ProjectionType::WebMercator,
    };

    /// Datum of the CRS.
    pub fn datum(&self) -> Datum {
        self.datum
    }

    /// Projection type of the CRS.
    pub fn projection_type(&self) -> &ProjectionType {
        &self.projection_type
    }

    /// Returns true if the coordinates of this CRS are longitude and latitude in degrees.
    pub fn is_geographic(&self) -> bool {
        self.projection_type == ProjectionType::None
    }

    /// EPSG code of the CRS.
    pub fn epsg(&self) -> u32 {
        match self.projection_type {
            ProjectionType::None => 4326,
            ProjectionType::WebMercator => 3857,
        }
    }

    /// Parses a named CRS as found in the legacy GeoJSON `crs.properties.name` member.
    ///
    /// Accepts `EPSG:<code>` and the OGC URN forms (`urn:ogc:def:crs:EPSG::<code>`,
    /// `urn:ogc:def:crs:EPSG:<version>:<code>`, `urn:ogc:def:crs:OGC:1.3:CRS84`). Returns
    /// `None` for systems this crate does not support.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let lower = name.to_ascii_lowercase();
        if lower == "urn:ogc:def:crs:ogc:1.3:crs84" || lower == "crs84" {
            return Some(Self::WGS84);
        }

        let code = if let Some(urn) = lower.strip_prefix("urn:ogc:def:crs:epsg:") {
            // Version is optional and sits between the authority and the code.
            urn.rsplit(':').next()?
        } else {
            lower.strip_prefix("epsg:")?
        };

        match code.parse::<u32>().ok()? {
            4326 => Some(Self::WGS84),
            3857 | 3785 | 900913 => Some(Self::EPSG3857),
            _ => None,
        }
    }

    /// Returns a projection from geographic coordinates on this CRS datum into this CRS.
    ///
    /// Returns `None` for geographic systems.
    pub fn get_projection<In, Out>(
        &self,
    ) -> Option<Box<dyn Projection<InPoint = In, OutPoint = Out>>>
    where
        In: NewGeoPoint + 'static,
        Out: NewCartesianPoint2d + 'static,
    {
        match self.projection_type {
            ProjectionType::WebMercator => Some(Box::new(WebMercator::new(self.datum))),
            ProjectionType::None => None,
        }
    }
}
