//! Load, reproject and write a whole document.

use crate::config::{CrsMismatchPolicy, ReprojectConfig};
use crate::document::{self, declared_crs, declared_crs_name, strip_crs};
use crate::error::ReprojectError;
use geojson::{Feature, GeoJson};
use reproj_types::geo::{Crs, InvertedProjection, Projection};
use reproj_types::geojson::{position_count, reproject_bbox, Reproject};
use reproj_types::{GeoPoint2d, Point2d};

type ToGeographic =
    InvertedProjection<Box<dyn Projection<InPoint = GeoPoint2d, OutPoint = Point2d>>>;

/// Statistics of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReprojectSummary {
    /// Number of features in the document.
    pub features: usize,
    /// Number of non-null geometries that were reprojected.
    pub geometries: usize,
    /// Number of positions that were reprojected.
    pub positions: usize,
    /// Name of the removed `crs` declaration, or its JSON text if it had no name.
    pub removed_crs: Option<String>,
}

/// Reads the configured input, reprojects it and writes the configured output.
///
/// The output is written only after the whole document has been reprojected.
pub fn run(config: &ReprojectConfig) -> Result<ReprojectSummary, ReprojectError> {
    log::info!("Reading {}", config.input().display());
    let mut document = document::load(config.input())?;

    check_declared_crs(&document, config)?;
    let mut summary = reproject_document(&mut document, config.source(), config.target())?;

    summary.removed_crs = strip_crs(&mut document).map(|crs| {
        declared_crs_name(&crs)
            .map(str::to_owned)
            .unwrap_or_else(|| crs.to_string())
    });
    if let Some(name) = &summary.removed_crs {
        log::debug!("Removed CRS declaration {name}");
    }

    document::write(config.output(), &document)?;
    log::info!(
        "Wrote {} features ({} positions) to {}",
        summary.features,
        summary.positions,
        config.output().display()
    );

    Ok(summary)
}

/// Reprojects every geometry and bounding box of the document in place.
///
/// Feature properties, ids and foreign members are left untouched. The `crs` member is not
/// removed here, see [`strip_crs`].
pub fn reproject_document(
    document: &mut GeoJson,
    source: &Crs,
    target: &Crs,
) -> Result<ReprojectSummary, ReprojectError> {
    let projection = projection(source, target)?;
    let mut summary = ReprojectSummary::default();

    match document {
        GeoJson::FeatureCollection(collection) => {
            if let Some(bbox) = &collection.bbox {
                collection.bbox = Some(
                    reproject_bbox(bbox, &projection)
                        .map_err(|source| ReprojectError::Geometry { feature: 0, source })?,
                );
            }

            for (index, feature) in collection.features.iter_mut().enumerate() {
                reproject_feature(feature, index, &projection, &mut summary)?;
            }
        }
        GeoJson::Feature(feature) => reproject_feature(feature, 0, &projection, &mut summary)?,
        GeoJson::Geometry(geometry) => {
            *geometry = geometry
                .reproject(&projection)
                .map_err(|source| ReprojectError::Geometry { feature: 0, source })?;
            summary.geometries = 1;
            summary.positions = position_count(&geometry.value);
        }
    }

    Ok(summary)
}

fn reproject_feature(
    feature: &mut Feature,
    index: usize,
    projection: &ToGeographic,
    summary: &mut ReprojectSummary,
) -> Result<(), ReprojectError> {
    let to_error = |source| ReprojectError::Geometry {
        feature: index,
        source,
    };

    summary.features += 1;
    if let Some(bbox) = &feature.bbox {
        feature.bbox = Some(reproject_bbox(bbox, projection).map_err(to_error)?);
    }

    match &mut feature.geometry {
        Some(geometry) => {
            *geometry = geometry.reproject(projection).map_err(to_error)?;
            summary.geometries += 1;
            summary.positions += position_count(&geometry.value);
        }
        None => log::debug!("Feature {index} has no geometry"),
    }

    Ok(())
}

fn projection(source: &Crs, target: &Crs) -> Result<ToGeographic, ReprojectError> {
    let unsupported = || ReprojectError::UnsupportedCrs {
        source_epsg: source.epsg(),
        target_epsg: target.epsg(),
    };

    if !target.is_geographic() || target.datum() != source.datum() {
        return Err(unsupported());
    }

    source
        .get_projection::<GeoPoint2d, Point2d>()
        .map(InvertedProjection::new)
        .ok_or_else(unsupported)
}

fn check_declared_crs(document: &GeoJson, config: &ReprojectConfig) -> Result<(), ReprojectError> {
    let expected = config.source();
    let Some(crs) = declared_crs(document) else {
        log::debug!(
            "Document has no CRS declaration, assuming EPSG:{}",
            expected.epsg()
        );
        return Ok(());
    };

    let name = declared_crs_name(crs);
    if name.and_then(Crs::from_name).as_ref() == Some(expected) {
        log::debug!("Document CRS {name:?} matches EPSG:{}", expected.epsg());
        return Ok(());
    }

    match config.crs_mismatch() {
        CrsMismatchPolicy::Warn => {
            log::warn!(
                "Document declares CRS {}, reprojecting it as EPSG:{} anyway",
                name.map(str::to_owned).unwrap_or_else(|| crs.to_string()),
                expected.epsg()
            );
            Ok(())
        }
        CrsMismatchPolicy::Fail => Err(ReprojectError::CrsMismatch {
            declared: name.map(str::to_owned),
            expected: expected.epsg(),
        }),
    }
}
