//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod geometry_request;
mod spatial_store;

#[cfg(test)]
pub use geometry_request::MockGeometryRequestHandler;
pub use geometry_request::{
    GeometryOutcome, GeometryRequest, GeometryRequestHandler, RequestMethod,
};
#[cfg(test)]
pub use spatial_store::MockSpatialStore;
pub use spatial_store::{FixtureSpatialStore, PointResult, SpatialStore, SpatialStoreError};
