//! Reading and writing GeoJSON documents and handling their legacy `crs` member.

use crate::error::ReprojectError;
use geojson::{GeoJson, JsonObject, JsonValue};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const CRS_MEMBER: &str = "crs";

/// Reads and parses the whole document at `path`.
pub fn load(path: &Path) -> Result<GeoJson, ReprojectError> {
    let text = fs::read_to_string(path).map_err(|err| ReprojectError::io(path, err))?;
    let document = text.parse::<GeoJson>()?;
    log::debug!("Loaded {} bytes from {}", text.len(), path.display());

    Ok(document)
}

/// Serializes the document into `path`, replacing the file if it exists.
pub fn write(path: &Path, document: &GeoJson) -> Result<(), ReprojectError> {
    let file = File::create(path).map_err(|err| ReprojectError::io(path, err))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, document)?;
    writer.flush().map_err(|err| ReprojectError::io(path, err))?;

    Ok(())
}

/// Returns the top-level `crs` member of the document.
pub fn declared_crs(document: &GeoJson) -> Option<&JsonValue> {
    foreign_members(document)?.get(CRS_MEMBER)
}

/// Returns `crs.properties.name` of a legacy named CRS declaration.
pub fn declared_crs_name(crs: &JsonValue) -> Option<&str> {
    crs.get("properties")?.get("name")?.as_str()
}

/// Removes the top-level `crs` member and returns it.
///
/// Without the member the document is implicitly WGS84. Calling it on a document without
/// the member does nothing.
pub fn strip_crs(document: &mut GeoJson) -> Option<JsonValue> {
    let members = foreign_members_mut(document).as_mut()?;
    let removed = members.remove(CRS_MEMBER);
    if members.is_empty() {
        *foreign_members_mut(document) = None;
    }

    removed
}

fn foreign_members(document: &GeoJson) -> Option<&JsonObject> {
    match document {
        GeoJson::FeatureCollection(collection) => collection.foreign_members.as_ref(),
        GeoJson::Feature(feature) => feature.foreign_members.as_ref(),
        GeoJson::Geometry(geometry) => geometry.foreign_members.as_ref(),
    }
}

fn foreign_members_mut(document: &mut GeoJson) -> &mut Option<JsonObject> {
    match document {
        GeoJson::FeatureCollection(collection) => &mut collection.foreign_members,
        GeoJson::Feature(feature) => &mut feature.foreign_members,
        GeoJson::Geometry(geometry) => &mut geometry.foreign_members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    const WITH_CRS: &str = r#"{
        "type": "FeatureCollection",
        "name": "areas",
        "crs": {"type": "name", "properties": {"name": "EPSG:3857"}},
        "features": []
    }"#;

    fn parse(json: &str) -> GeoJson {
        json.parse().expect("invalid test document")
    }

    #[test]
    fn read_crs_declaration() {
        let document = parse(WITH_CRS);
        let crs = declared_crs(&document).expect("crs is not found");
        assert_eq!(declared_crs_name(crs), Some("EPSG:3857"));
    }

    #[test]
    fn crs_without_name() {
        let crs = json!({"type": "link", "properties": {"href": "http://example.com/crs"}});
        assert_eq!(declared_crs_name(&crs), None);
    }

    #[test]
    fn strip_keeps_other_members() {
        let mut document = parse(WITH_CRS);
        let removed = strip_crs(&mut document);

        assert_eq!(
            removed,
            Some(json!({"type": "name", "properties": {"name": "EPSG:3857"}}))
        );
        assert!(declared_crs(&document).is_none());
        assert_matches!(&document, GeoJson::FeatureCollection(fc)
            if fc.foreign_members.as_ref().and_then(|m| m.get("name")) == Some(&json!("areas")));
    }

    #[test]
    fn strip_is_idempotent() {
        let mut once = parse(WITH_CRS);
        strip_crs(&mut once);

        let mut twice = once.clone();
        assert_eq!(strip_crs(&mut twice), None);
        assert_eq!(once, twice);
    }

    #[test]
    fn strip_without_crs() {
        let mut document = parse(r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#);
        let original = document.clone();
        assert_eq!(strip_crs(&mut document), None);
        assert_eq!(document, original);
    }

    #[test]
    fn only_member_removed() {
        let mut document = parse(
            r#"{"type": "FeatureCollection", "crs": {"type": "name", "properties": {"name": "EPSG:3857"}}, "features": []}"#,
        );
        assert!(strip_crs(&mut document).is_some());
        assert_matches!(&document, GeoJson::FeatureCollection(fc) if fc.foreign_members.is_none());
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("missing.geojson");
        assert_matches!(load(&path), Err(ReprojectError::Io { path: p, .. }) if p == path);
    }

    #[test]
    fn load_malformed_json() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.geojson");
        fs::write(&path, r#"{"type": "FeatureCollection", "features": [}"#)
            .expect("failed to write test file");
        assert_matches!(load(&path), Err(ReprojectError::Parse(_)));
    }

    #[test]
    fn load_unknown_geometry_type() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("unknown.geojson");
        fs::write(&path, r#"{"type": "Circle", "coordinates": [0.0, 0.0]}"#)
            .expect("failed to write test file");
        assert_matches!(load(&path), Err(ReprojectError::Parse(_)));
    }

    #[test]
    fn write_and_load() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("out.geojson");
        fs::write(&path, "stale content that is longer than the new document")
            .expect("failed to write test file");

        let document = parse(r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#);
        write(&path, &document).expect("failed to write");
        assert_eq!(load(&path).expect("failed to load"), document);
    }
}
