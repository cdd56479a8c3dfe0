//! Request classification: selects exactly one operation per request.
//!
//! | Method | Content-Type           | Body                          | Operation        |
//! |--------|------------------------|-------------------------------|------------------|
//! | POST   | `application/geo+json` | JSON array                    | bulk insert      |
//! | POST   | `application/geo+json` | geometry object               | insert geometry  |
//! | GET    | any                    | `Point` + numeric `radius`    | radius query     |
//! | GET    | any                    | `Polygon`                     | polygon query    |
//!
//! Everything else is rejected. The array/object split is made on the parsed
//! JSON value before any geometry decoding.

use serde_json::Value;

use crate::domain::geometry::{Geometry, decode_geometry};
use crate::domain::ports::{GeometryRequest, RequestMethod};
use crate::domain::query::{GeometryInput, PolygonQuery, RadiusQuery};
use crate::domain::srid::resolve_srid;
use crate::domain::{Error, Srid};

/// Media type required for insertion requests.
pub const GEOJSON_CONTENT_TYPE: &str = "application/geo+json";

const MALFORMED_BODY: &str = "Request body is not valid JSON.";
const QUERY_KIND_ONLY: &str =
    "Invalid GeoJSON object; Please GET with only a GeoJSON Point or Polygon.";
const UNSUPPORTED_REQUEST: &str = "Invalid request; Please issue a GET with either a GeoJSON \
    Polygon, or a GeoJSON Point with a numeric radius, or issue a POST (Content-Type: \
    application/geo+json) with an array of GeoJSON geometries or a single GeoJSON geometry.";

/// The operation a request resolves to, with fully typed inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Insert every geometry of a bare JSON array.
    BulkInsertArray(Vec<GeometryInput>),
    /// Insert one geometry (possibly a collection).
    InsertGeometry(GeometryInput),
    /// Select points near a centre point.
    RadiusQuery(RadiusQuery),
    /// Select points inside a polygon.
    PolygonQuery(PolygonQuery),
}

impl Operation {
    /// Short label for log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BulkInsertArray(_) => "bulk_insert_array",
            Self::InsertGeometry(_) => "insert_geometry",
            Self::RadiusQuery(_) => "radius_query",
            Self::PolygonQuery(_) => "polygon_query",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Insert,
    Query,
}

/// Classify a request, decoding and validating everything the chosen
/// operation needs. No store access happens here.
///
/// # Examples
/// ```
/// use geojson_points::domain::ports::{GeometryRequest, RequestMethod};
/// use geojson_points::domain::request::{Operation, classify};
/// use geojson_points::domain::Srid;
///
/// let request = GeometryRequest {
///     method: RequestMethod::Get,
///     content_type: None,
///     body: br#"{"type":"Point","coordinates":[-90.1775,29.99778],"radius":3000}"#.to_vec(),
/// };
/// let operation = classify(&request, Srid::default()).expect("classifies");
/// assert!(matches!(operation, Operation::RadiusQuery(_)));
/// ```
pub fn classify(request: &GeometryRequest, default_srid: Srid) -> Result<Operation, Error> {
    let body: Value = serde_json::from_slice(&request.body)
        .map_err(|_| Error::malformed_body(MALFORMED_BODY))?;
    let mode = dispatch_mode(request)?;

    match (mode, body) {
        (Mode::Insert, Value::Array(items)) => items
            .into_iter()
            .map(|item| geometry_input(item, default_srid))
            .collect::<Result<Vec<_>, _>>()
            .map(Operation::BulkInsertArray),
        (Mode::Insert, value) => geometry_input(value, default_srid).map(Operation::InsertGeometry),
        (Mode::Query, Value::Array(_)) => Err(Error::invalid_request(UNSUPPORTED_REQUEST)),
        (Mode::Query, value) => query_operation(value, default_srid),
    }
}

fn dispatch_mode(request: &GeometryRequest) -> Result<Mode, Error> {
    match request.method {
        RequestMethod::Post if is_geojson_content_type(request.content_type.as_deref()) => {
            Ok(Mode::Insert)
        }
        RequestMethod::Get => Ok(Mode::Query),
        RequestMethod::Post | RequestMethod::Other(_) => {
            Err(Error::invalid_request(UNSUPPORTED_REQUEST))
        }
    }
}

/// Whether a `Content-Type` value names GeoJSON, ignoring parameters and case.
pub fn is_geojson_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(GEOJSON_CONTENT_TYPE))
}

fn geometry_input(value: Value, default_srid: Srid) -> Result<GeometryInput, Error> {
    let raw_srid = value.get("srid").cloned();
    let geometry = decode_geometry(value)?;
    let srid = resolve_srid(raw_srid.as_ref(), default_srid)?;
    Ok(GeometryInput { geometry, srid })
}

fn query_operation(value: Value, default_srid: Srid) -> Result<Operation, Error> {
    let raw_radius = value.get("radius").cloned();
    let GeometryInput { geometry, srid } = geometry_input(value, default_srid)?;
    match geometry {
        Geometry::Point(center) => {
            let radius = radius_meters(raw_radius.as_ref())?;
            RadiusQuery::new(center, srid, radius).map(Operation::RadiusQuery)
        }
        Geometry::Polygon(rings) => PolygonQuery::new(&rings, srid).map(Operation::PolygonQuery),
        Geometry::MultiPoint(_)
        | Geometry::LineString(_)
        | Geometry::MultiLineString(_)
        | Geometry::MultiPolygon(_)
        | Geometry::GeometryCollection(_) => Err(Error::invalid_geometry(QUERY_KIND_ONLY)),
    }
}

fn radius_meters(raw: Option<&Value>) -> Result<f64, Error> {
    match raw {
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| Error::invalid_request("radius must be a number of meters")),
        Some(_) => Err(Error::invalid_request("radius must be a number of meters")),
        None => Err(Error::invalid_request(
            "A GeoJSON Point query requires a numeric radius in meters.",
        )),
    }
}

#[cfg(test)]
mod tests;
