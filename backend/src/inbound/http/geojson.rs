//! Geometry endpoint handler and response encoder.
//!
//! ```text
//! POST / (Content-Type: application/geo+json)   insert geometry or array
//! GET  /                                        radius or polygon query
//! ```
//!
//! The route accepts every method so that unsupported ones reach the
//! classifier and receive its explanatory 400 instead of a bare 404/405.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::error;

use crate::domain::Error;
use crate::domain::ports::{GeometryOutcome, GeometryRequest, PointResult, RequestMethod};
use crate::domain::request::GEOJSON_CONTENT_TYPE;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Confirmation text returned by insert operations.
pub fn insert_message(count: usize) -> String {
    format!("Inserted {count} points into the database.")
}

/// Register the geometry endpoint on `/` for every method.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::route().to(geometry_endpoint)));
}

/// Insert GeoJSON geometry or query stored points.
///
/// POST bodies hold a geometry or an array of geometries and require the
/// `application/geo+json` content type. GET bodies hold a `Point` with a
/// numeric `radius` in meters, or a `Polygon`. Any body may carry an `srid`.
#[utoipa::path(
    method(get, post),
    path = "/",
    request_body(
        content = serde_json::Value,
        content_type = "application/geo+json",
        description = "GeoJSON geometry, array of geometries, or query geometry"
    ),
    responses(
        (
            status = 200,
            description = "Insert confirmation or matching points in storage order",
            content(
                (Vec<PointResult> = "application/geo+json"),
                (String = "text/html")
            )
        ),
        (status = 400, description = "Malformed body, invalid geometry, or unsupported request", body = String, content_type = "text/html"),
        (status = 500, description = "Spatial store failure", body = String, content_type = "text/html")
    ),
    tags = ["geometry"],
    operation_id = "geometry"
)]
pub async fn geometry_endpoint(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request = GeometryRequest {
        method: RequestMethod::from(req.method().as_str()),
        content_type: req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
        body: body.to_vec(),
    };

    let outcome = state.geometry.handle(request).await?;
    encode_outcome(outcome)
}

/// Turn a handled request into its HTTP response.
pub fn encode_outcome(outcome: GeometryOutcome) -> ApiResult<HttpResponse> {
    match outcome {
        GeometryOutcome::Inserted { count } => Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(insert_message(count))),
        GeometryOutcome::Matches(points) => {
            let body = serde_json::to_vec(&points).map_err(|err| {
                error!(error = %err, "failed to encode query results");
                Error::store_failure("query results could not be encoded")
            })?;
            Ok(HttpResponse::Ok()
                .content_type(GEOJSON_CONTENT_TYPE)
                .body(body))
        }
    }
}

#[cfg(test)]
#[path = "geojson_tests.rs"]
mod tests;
