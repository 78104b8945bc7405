//! Reprojection of [`geojson`] geometries.
//!
//! [`Reproject`] walks a geometry structurally: every tag keeps its nesting and every
//! position is replaced by the projected one. Only the first two ordinates of a position
//! are passed through the projection, the rest (elevation etc.) are copied as is.

use crate::error::ReprojTypesError;
use crate::geo::Projection;
use crate::point::PositionPoint;
use geojson::{Bbox, Geometry, LineStringType, PolygonType, Position, Value};

mod position;

pub use position::{reproject_bbox, reproject_position};

/// GeoJSON object that can be moved to another coordinate system.
pub trait Reproject: Sized {
    /// Returns a copy of the object with every position projected.
    fn reproject<Proj>(&self, projection: &Proj) -> Result<Self, ReprojTypesError>
    where
        Proj: Projection + ?Sized,
        Proj::InPoint: PositionPoint,
        Proj::OutPoint: PositionPoint;
}

impl Reproject for Geometry {
    fn reproject<Proj>(&self, projection: &Proj) -> Result<Self, ReprojTypesError>
    where
        Proj: Projection + ?Sized,
        Proj::InPoint: PositionPoint,
        Proj::OutPoint: PositionPoint,
    {
        Ok(Geometry {
            bbox: reproject_optional_bbox(&self.bbox, projection)?,
            value: self.value.reproject(projection)?,
            foreign_members: self.foreign_members.clone(),
        })
    }
}

impl Reproject for Value {
    fn reproject<Proj>(&self, projection: &Proj) -> Result<Self, ReprojTypesError>
    where
        Proj: Projection + ?Sized,
        Proj::InPoint: PositionPoint,
        Proj::OutPoint: PositionPoint,
    {
        Ok(match self {
            Value::Point(p) => Value::Point(reproject_position(p, projection)?),
            Value::MultiPoint(points) => Value::MultiPoint(convert_positions(points, projection)?),
            Value::LineString(line) => Value::LineString(convert_positions(line, projection)?),
            Value::MultiLineString(lines) => {
                Value::MultiLineString(convert_multi_line(lines, projection)?)
            }
            Value::Polygon(polygon) => Value::Polygon(convert_polygon(polygon, projection)?),
            Value::MultiPolygon(mp) => Value::MultiPolygon(
                mp.iter()
                    .map(|polygon| convert_polygon(polygon, projection))
                    .collect::<Result<_, _>>()?,
            ),
            Value::GeometryCollection(geometries) => Value::GeometryCollection(
                geometries
                    .iter()
                    .map(|geometry| geometry.reproject(projection))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

/// Number of positions in the geometry value, including nested collections.
pub fn position_count(value: &Value) -> usize {
    match value {
        Value::Point(_) => 1,
        Value::MultiPoint(points) | Value::LineString(points) => points.len(),
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            lines.iter().map(Vec::len).sum()
        }
        Value::MultiPolygon(mp) => mp
            .iter()
            .flat_map(|polygon| polygon.iter().map(Vec::len))
            .sum(),
        Value::GeometryCollection(geometries) => geometries
            .iter()
            .map(|geometry| position_count(&geometry.value))
            .sum(),
    }
}

pub(crate) fn reproject_optional_bbox<Proj>(
    bbox: &Option<Bbox>,
    projection: &Proj,
) -> Result<Option<Bbox>, ReprojTypesError>
where
    Proj: Projection + ?Sized,
    Proj::InPoint: PositionPoint,
    Proj::OutPoint: PositionPoint,
{
    bbox.as_ref()
        .map(|bbox| reproject_bbox(bbox, projection))
        .transpose()
}

fn convert_positions<Proj>(
    positions: &[Position],
    projection: &Proj,
) -> Result<LineStringType, ReprojTypesError>
where
    Proj: Projection + ?Sized,
    Proj::InPoint: PositionPoint,
    Proj::OutPoint: PositionPoint,
{
    positions
        .iter()
        .map(|p| reproject_position(p, projection))
        .collect()
}

fn convert_multi_line<Proj>(
    lines: &[LineStringType],
    projection: &Proj,
) -> Result<Vec<LineStringType>, ReprojTypesError>
where
    Proj: Projection + ?Sized,
    Proj::InPoint: PositionPoint,
    Proj::OutPoint: PositionPoint,
{
    lines
        .iter()
        .map(|line| convert_positions(line, projection))
        .collect()
}

fn convert_polygon<Proj>(
    polygon: &PolygonType,
    projection: &Proj,
) -> Result<PolygonType, ReprojTypesError>
where
    Proj: Projection + ?Sized,
    Proj::InPoint: PositionPoint,
    Proj::OutPoint: PositionPoint,
{
    convert_multi_line(polygon, projection)
}
