//! Conversion from decoded GeoJSON into [`Geometry`].
//!
//! JSON grammar and GeoJSON object parsing are delegated to the `geojson`
//! crate; this module only narrows its output to the kinds the service
//! accepts and validates positions.

use geojson::GeoJson;
use serde_json::Value;

use super::{Coordinate, Geometry, Path};
use crate::domain::Error;

/// Message returned when a body is not a GeoJSON geometry object.
pub(crate) const NOT_A_GEOMETRY: &str = "Input is not a valid GeoJSON Geometry type.";

/// Decode a parsed JSON value into a [`Geometry`].
///
/// Features, feature collections, and anything the GeoJSON decoder rejects
/// yield [`ErrorCode::InvalidGeometry`](crate::domain::ErrorCode::InvalidGeometry).
/// Unknown top-level members such as `srid` or `radius` are ignored.
///
/// # Examples
/// ```
/// use geojson_points::domain::geometry::{Coordinate, Geometry, decode_geometry};
/// use serde_json::json;
///
/// let geometry = decode_geometry(json!({"type": "Point", "coordinates": [1.0, 2.0], "srid": 4326}))
///     .expect("point decodes");
/// assert_eq!(geometry, Geometry::Point(Coordinate::new(1.0, 2.0)));
/// ```
pub fn decode_geometry(value: Value) -> Result<Geometry, Error> {
    match GeoJson::from_json_value(value) {
        Ok(GeoJson::Geometry(geometry)) => convert_geometry(&geometry),
        Ok(GeoJson::Feature(_) | GeoJson::FeatureCollection(_)) | Err(_) => {
            Err(Error::invalid_geometry(NOT_A_GEOMETRY))
        }
    }
}

fn convert_geometry(geometry: &geojson::Geometry) -> Result<Geometry, Error> {
    use geojson::Value as G;

    match &geometry.value {
        G::Point(position) => coordinate(position).map(Geometry::Point),
        G::MultiPoint(positions) => path(positions).map(Geometry::MultiPoint),
        G::LineString(positions) => path(positions).map(Geometry::LineString),
        G::MultiLineString(lines) => paths(lines).map(Geometry::MultiLineString),
        G::Polygon(rings) => paths(rings).map(Geometry::Polygon),
        G::MultiPolygon(polygons) => polygons
            .iter()
            .map(|rings| paths(rings))
            .collect::<Result<Vec<_>, _>>()
            .map(Geometry::MultiPolygon),
        G::GeometryCollection(members) => members
            .iter()
            .map(convert_geometry)
            .collect::<Result<Vec<_>, _>>()
            .map(Geometry::GeometryCollection),
    }
}

fn coordinate(position: &[f64]) -> Result<Coordinate, Error> {
    match position {
        [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Coordinate::new(*x, *y)),
        _ => Err(Error::invalid_geometry(
            "GeoJSON positions must contain at least two finite numbers.",
        )),
    }
}

fn path(positions: &[Vec<f64>]) -> Result<Path, Error> {
    positions.iter().map(|position| coordinate(position)).collect()
}

fn paths(lines: &[Vec<Vec<f64>>]) -> Result<Vec<Path>, Error> {
    lines.iter().map(|line| path(line)).collect()
}
