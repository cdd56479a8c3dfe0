//! HTTP inbound adapter exposing the geometry endpoint and health probes.

pub mod error;
pub mod geojson;
pub mod health;
pub mod state;

pub use error::ApiResult;
