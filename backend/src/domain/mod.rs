//! Domain primitives and services.
//!
//! Purpose: Decode GeoJSON geometry, resolve spatial reference identifiers,
//! classify requests into operations, and orchestrate them against the
//! spatial store port. Nothing in this module touches HTTP or SQL directly.
//!
//! Public surface:
//! - Error (alias to `error::Error`): client-facing error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Srid (alias to `srid::Srid`): validated spatial reference identifier.
//! - GeometryRequestService: the geometry endpoint's domain service.

pub mod error;
pub mod geometry;
mod geometry_request_service;
pub mod ports;
pub mod query;
pub mod request;
pub mod srid;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::geometry_request_service::GeometryRequestService;
pub use self::srid::{GEOGRAPHIC_SRID, Srid, SridValidationError};
