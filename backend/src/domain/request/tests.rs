//! Dispatch table coverage for request classification.

use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::geometry::Coordinate;

#[fixture]
fn default_srid() -> Srid {
    Srid::new(4326).expect("valid srid")
}

fn request(method: RequestMethod, content_type: Option<&str>, body: &Value) -> GeometryRequest {
    GeometryRequest {
        method,
        content_type: content_type.map(str::to_owned),
        body: serde_json::to_vec(body).expect("serialise body"),
    }
}

fn post(body: &Value) -> GeometryRequest {
    request(RequestMethod::Post, Some(GEOJSON_CONTENT_TYPE), body)
}

fn get(body: &Value) -> GeometryRequest {
    request(RequestMethod::Get, None, body)
}

fn error_code(request: &GeometryRequest, default_srid: Srid) -> ErrorCode {
    classify(request, default_srid)
        .expect_err("classification fails")
        .code()
}

fn louisiana_points() -> Value {
    json!([
        {"type": "Point", "coordinates": [-90.02944, 29.90222]},
        {"type": "Point", "coordinates": [-90.07806, 30.36917]},
        {"type": "Point", "coordinates": [-90.1975, 30.4958]}
    ])
}

#[rstest]
fn post_array_selects_bulk_insert(default_srid: Srid) {
    let Ok(Operation::BulkInsertArray(inputs)) = classify(&post(&louisiana_points()), default_srid)
    else {
        panic!("expected bulk insert");
    };
    assert_eq!(inputs.len(), 3);
    assert!(inputs.iter().all(|input| input.srid == default_srid));
}

#[rstest]
fn array_elements_may_carry_their_own_srid(default_srid: Srid) {
    let body = json!([
        {"type": "Point", "coordinates": [1.0, 2.0], "srid": 3857},
        {"type": "Point", "coordinates": [3.0, 4.0]}
    ]);
    let Ok(Operation::BulkInsertArray(inputs)) = classify(&post(&body), default_srid) else {
        panic!("expected bulk insert");
    };
    let srids = inputs.iter().map(|input| input.srid.get()).collect::<Vec<_>>();
    assert_eq!(srids, vec![3857, 4326]);
}

#[rstest]
fn one_bad_array_element_rejects_the_whole_array(default_srid: Srid) {
    let body = json!([
        {"type": "Point", "coordinates": [1.0, 2.0]},
        {"type": "Feature", "geometry": null, "properties": {}}
    ]);
    assert_eq!(error_code(&post(&body), default_srid), ErrorCode::InvalidGeometry);
}

#[rstest]
fn post_object_selects_insert_with_requested_srid(default_srid: Srid) {
    let body = json!({
        "type": "LineString",
        "coordinates": [[0.0, 0.0], [1.0, 1.0]],
        "srid": 4001
    });
    let Ok(Operation::InsertGeometry(input)) = classify(&post(&body), default_srid) else {
        panic!("expected single insert");
    };
    assert_eq!(input.srid.get(), 4001);
    assert_eq!(input.geometry.flatten().len(), 2);
}

#[rstest]
fn content_type_parameters_are_ignored(default_srid: Srid) {
    let body = json!({"type": "Point", "coordinates": [1.0, 2.0]});
    let request = request(
        RequestMethod::Post,
        Some("Application/Geo+JSON; charset=utf-8"),
        &body,
    );
    assert!(matches!(
        classify(&request, default_srid),
        Ok(Operation::InsertGeometry(_))
    ));
}

#[rstest]
fn get_point_with_radius_selects_radius_query(default_srid: Srid) {
    let body = json!({"type": "Point", "coordinates": [-90.1775, 29.99778], "radius": 12000});
    let Ok(Operation::RadiusQuery(query)) = classify(&get(&body), default_srid) else {
        panic!("expected radius query");
    };
    assert_eq!(query.center().to_string(), "SRID=4326;POINT(-90.1775 29.99778)");
    assert_eq!(query.radius_meters(), 12000.0);
}

#[rstest]
fn get_polygon_selects_polygon_query(default_srid: Srid) {
    let body = json!({
        "type": "Polygon",
        "coordinates": [[
            [-74.00597, 40.71427],
            [-97.74306, 30.26715],
            [-82.45843, 27.94752],
            [-74.00597, 40.71427]
        ]],
        "srid": "3857"
    });
    let Ok(Operation::PolygonQuery(query)) = classify(&get(&body), default_srid) else {
        panic!("expected polygon query");
    };
    assert_eq!(query.srid().get(), 3857);
    assert!(query.polygon().to_string().starts_with("SRID=3857;POLYGON(("));
}

#[rstest]
#[case::not_json(b"{not json".to_vec())]
#[case::empty(Vec::new())]
fn unparsable_bodies_are_malformed(#[case] body: Vec<u8>, default_srid: Srid) {
    let request = GeometryRequest {
        method: RequestMethod::Post,
        content_type: Some(GEOJSON_CONTENT_TYPE.to_owned()),
        body,
    };
    assert_eq!(error_code(&request, default_srid), ErrorCode::MalformedBody);
}

#[rstest]
#[case::post_without_content_type(request(
    RequestMethod::Post,
    None,
    &json!({"type": "Point", "coordinates": [1.0, 2.0]})
))]
#[case::post_with_plain_json(request(
    RequestMethod::Post,
    Some("application/json"),
    &json!({"type": "Point", "coordinates": [1.0, 2.0]})
))]
#[case::put(request(
    RequestMethod::Other("PUT".to_owned()),
    Some(GEOJSON_CONTENT_TYPE),
    &json!({"type": "Point", "coordinates": [1.0, 2.0]})
))]
#[case::get_array(get(&louisiana_points()))]
#[case::get_point_without_radius(get(&json!({"type": "Point", "coordinates": [1.0, 2.0]})))]
#[case::get_point_with_text_radius(get(
    &json!({"type": "Point", "coordinates": [1.0, 2.0], "radius": "3000"})
))]
#[case::get_point_with_negative_radius(get(
    &json!({"type": "Point", "coordinates": [1.0, 2.0], "radius": -5})
))]
#[case::bad_srid(post(&json!({"type": "Point", "coordinates": [1.0, 2.0], "srid": "abc"})))]
fn unsupported_combinations_are_invalid_requests(
    #[case] request: GeometryRequest,
    default_srid: Srid,
) {
    assert_eq!(error_code(&request, default_srid), ErrorCode::InvalidRequest);
}

#[rstest]
#[case::feature_on_get(get(&json!({
    "type": "Feature",
    "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
    "properties": {},
    "radius": 10
})))]
#[case::line_on_get(get(&json!({"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]})))]
#[case::collection_on_get(get(&json!({"type": "GeometryCollection", "geometries": []})))]
#[case::feature_on_post(post(&json!({
    "type": "Feature",
    "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
    "properties": {}
})))]
#[case::scalar_on_post(post(&json!(42)))]
#[case::open_interior_ring_on_get(get(&json!({
    "type": "Polygon",
    "coordinates": [
        [[0.0, 0.0], [3.0, 0.0], [3.0, 3.0], [0.0, 3.0], [0.0, 0.0]],
        [[1.0, 1.0], [2.0, 1.0]]
    ]
})))]
fn non_geometries_are_invalid_geometry(#[case] request: GeometryRequest, default_srid: Srid) {
    assert_eq!(error_code(&request, default_srid), ErrorCode::InvalidGeometry);
}

#[rstest]
fn default_srid_applies_when_absent() {
    let default_srid = Srid::new(3857).expect("valid srid");
    let body = json!({"type": "Point", "coordinates": [1.0, 2.0]});
    let Ok(Operation::InsertGeometry(input)) = classify(&post(&body), default_srid) else {
        panic!("expected single insert");
    };
    assert_eq!(input.srid, default_srid);
    assert_eq!(input.geometry.flatten(), vec![Coordinate::new(1.0, 2.0)]);
}

#[rstest]
#[case(Some("application/geo+json"), true)]
#[case(Some(" application/geo+json ;charset=utf-8"), true)]
#[case(Some("application/json"), false)]
#[case(Some(""), false)]
#[case(None, false)]
fn recognises_geojson_content_type(#[case] content_type: Option<&str>, #[case] expected: bool) {
    assert_eq!(is_geojson_content_type(content_type), expected);
}
