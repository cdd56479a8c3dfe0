//! OpenAPI documentation for the geometry service.
//!
//! Registers the geometry endpoint, the health probes, and the
//! [`PointResult`] row schema. Served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::ports::PointResult;

/// OpenAPI document for the HTTP interface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GeoJSON points API",
        description = "Insert GeoJSON geometry as points and query them by radius or polygon."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::geojson::geometry_endpoint,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(PointResult)),
    tags(
        (name = "geometry", description = "Point insertion and spatial queries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
