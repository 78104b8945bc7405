use crate::error::ReprojTypesError;
use crate::geo::Projection;
use crate::point::PositionPoint;
use geojson::{Bbox, Position};

/// Projects the first two ordinates of a position and copies the rest.
pub fn reproject_position<Proj>(
    position: &Position,
    projection: &Proj,
) -> Result<Position, ReprojTypesError>
where
    Proj: Projection + ?Sized,
    Proj::InPoint: PositionPoint,
    Proj::OutPoint: PositionPoint,
{
    if position.len() < 2 {
        return Err(ReprojTypesError::Conversion(
            "position must contain at least 2 dimensions".to_string(),
        ));
    }

    let mut projected = project_pair(position[0], position[1], projection)?.to_vec();
    projected.extend_from_slice(&position[2..]);
    Ok(projected)
}

/// Projects a `[min..., max...]` bounding box.
///
/// Both corners are projected separately. This is correct for projections that are
/// monotonic along each axis, which is the case for Web Mercator.
pub fn reproject_bbox<Proj>(bbox: &Bbox, projection: &Proj) -> Result<Bbox, ReprojTypesError>
where
    Proj: Projection + ?Sized,
    Proj::InPoint: PositionPoint,
    Proj::OutPoint: PositionPoint,
{
    if bbox.len() < 4 || bbox.len() % 2 != 0 {
        return Err(ReprojTypesError::Conversion(format!(
            "bbox must contain 2 * n values with n >= 2, got {}",
            bbox.len()
        )));
    }

    let dimensions = bbox.len() / 2;
    let (min, max) = bbox.split_at(dimensions);

    let mut projected = Vec::with_capacity(bbox.len());
    projected.extend(project_pair(min[0], min[1], projection)?);
    projected.extend_from_slice(&min[2..]);
    projected.extend(project_pair(max[0], max[1], projection)?);
    projected.extend_from_slice(&max[2..]);

    Ok(projected)
}

fn project_pair<Proj>(
    first: f64,
    second: f64,
    projection: &Proj,
) -> Result<[f64; 2], ReprojTypesError>
where
    Proj: Projection + ?Sized,
    Proj::InPoint: PositionPoint,
    Proj::OutPoint: PositionPoint,
{
    projection
        .project(&Proj::InPoint::from_ordinates(first, second))
        .map(|point| point.ordinates())
        .ok_or(ReprojTypesError::Projection {
            x: first,
            y: second,
        })
}
