//! GeoJSON point store service library.
//!
//! Decodes GeoJSON geometry from HTTP requests, stores every vertex as a
//! PostGIS point, and answers radius and polygon queries.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI.
pub use doc::ApiDoc;
pub use middleware::Trace;
