//! Decoding, flattening, and EWKT rendering coverage.

use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::{ErrorCode, Srid};

fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

fn decode(value: Value) -> Geometry {
    decode_geometry(value).expect("geometry decodes")
}

#[rstest]
fn decodes_point_ignoring_envelope_members() {
    let geometry = decode(json!({
        "type": "Point",
        "coordinates": [-90.1775, 29.99778],
        "radius": 3000,
        "srid": "4326"
    }));
    assert_eq!(geometry, Geometry::Point(c(-90.1775, 29.99778)));
}

#[rstest]
fn decodes_nested_collection() {
    let geometry = decode(json!({
        "type": "GeometryCollection",
        "geometries": [
            {"type": "Point", "coordinates": [-91.147385, 30.471165]},
            {"type": "LineString", "coordinates": [[-90.071533, 29.951065], [-89.961602, 29.945504]]}
        ]
    }));
    assert_eq!(geometry.kind(), GeometryKind::GeometryCollection);
    assert_eq!(
        geometry.flatten(),
        vec![
            c(-91.147385, 30.471165),
            c(-90.071533, 29.951065),
            c(-89.961602, 29.945504),
        ]
    );
}

#[rstest]
fn discards_altitude() {
    let geometry = decode(json!({"type": "Point", "coordinates": [1.0, 2.0, 30.0]}));
    assert_eq!(geometry, Geometry::Point(c(1.0, 2.0)));
}

#[rstest]
#[case::feature(json!({
    "type": "Feature",
    "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
    "properties": {}
}))]
#[case::feature_collection(json!({"type": "FeatureCollection", "features": []}))]
#[case::unknown_type(json!({"type": "Circle", "coordinates": [1.0, 2.0]}))]
#[case::missing_coordinates(json!({"type": "Point"}))]
#[case::not_an_object(json!("Point"))]
#[case::short_position(json!({"type": "Point", "coordinates": [1.0]}))]
fn rejects_non_geometries(#[case] value: Value) {
    let err = decode_geometry(value).expect_err("decode fails");
    assert_eq!(err.code(), ErrorCode::InvalidGeometry);
}

#[rstest]
#[case::point(Geometry::Point(c(1.0, 2.0)), 1)]
#[case::line(Geometry::LineString(vec![c(0.0, 0.0), c(1.0, 1.0)]), 2)]
#[case::multi_line(
    Geometry::MultiLineString(vec![
        vec![c(7.0, 0.0), c(8.0, 1.0)],
        vec![c(9.0, 2.0), c(10.0, 3.0)],
    ]),
    4
)]
#[case::polygon_keeps_closing_vertex(
    Geometry::Polygon(vec![vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 0.0)]]),
    4
)]
#[case::multi_polygon(
    Geometry::MultiPolygon(vec![
        vec![vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 0.0)]],
        vec![vec![c(5.0, 5.0), c(6.0, 5.0), c(6.0, 6.0), c(5.0, 5.0)]],
    ]),
    8
)]
#[case::empty_collection(Geometry::GeometryCollection(Vec::new()), 0)]
fn flatten_counts_every_vertex(#[case] geometry: Geometry, #[case] expected: usize) {
    assert_eq!(geometry.flatten().len(), expected);
}

#[rstest]
fn flatten_preserves_traversal_order() {
    let geometry = Geometry::MultiLineString(vec![
        vec![c(7.0, 0.0), c(8.0, 1.0)],
        vec![c(9.0, 2.0), c(10.0, 3.0)],
    ]);
    let xs = geometry
        .flatten()
        .into_iter()
        .map(|point| point.x)
        .collect::<Vec<_>>();
    assert_eq!(xs, vec![7.0, 8.0, 9.0, 10.0]);
}

#[rstest]
fn polygon_ewkt_lists_rings() {
    let srid = Srid::new(4326).expect("valid srid");
    let ewkt = Ewkt::polygon(
        &[vec![c(67.0, 6.0), c(67.0, 5.0), c(68.0, 5.0), c(68.0, 6.0), c(67.0, 6.0)]],
        srid,
    );
    assert_eq!(
        ewkt.to_string(),
        "SRID=4326;POLYGON((67 6,67 5,68 5,68 6,67 6))"
    );
    assert_eq!(ewkt.srid(), srid);
}

#[rstest]
fn polygon_ewkt_keeps_interior_rings_after_the_exterior() {
    let srid = Srid::new(4326).expect("valid srid");
    let ewkt = Ewkt::polygon(
        &[
            vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0), c(0.0, 10.0), c(0.0, 0.0)],
            vec![c(2.0, 2.0), c(4.0, 2.0), c(4.0, 4.0), c(2.0, 2.0)],
        ],
        srid,
    );
    assert_eq!(
        ewkt.to_string(),
        "SRID=4326;POLYGON((0 0,10 0,10 10,0 10,0 0),(2 2,4 2,4 4,2 2))"
    );
}

#[rstest]
fn point_ewkt_keeps_full_precision() {
    let srid = Srid::new(3857).expect("valid srid");
    let ewkt = Ewkt::point(c(-90.071533, 29.951065), srid);
    assert_eq!(ewkt.to_string(), "SRID=3857;POINT(-90.071533 29.951065)");
}

#[rstest]
#[case(json!({"type": "Point", "coordinates": [1.0, 2.0]}), "Point")]
#[case(json!({"type": "MultiPoint", "coordinates": [[1.0, 2.0]]}), "MultiPoint")]
#[case(json!({"type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]]}), "LineString")]
#[case(
    json!({"type": "MultiPolygon", "coordinates": [[[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]]}),
    "MultiPolygon"
)]
fn kind_names_match_geojson_type_member(#[case] body: Value, #[case] expected: &str) {
    assert_eq!(decode(body).kind().as_str(), expected);
}
