//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::GeometryRequestHandler;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub geometry: Arc<dyn GeometryRequestHandler>,
}

impl HttpState {
    /// Construct state around a geometry request handler.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use geojson_points::domain::ports::FixtureSpatialStore;
    /// use geojson_points::domain::{GeometryRequestService, Srid};
    /// use geojson_points::inbound::http::state::HttpState;
    ///
    /// let service = GeometryRequestService::new(Arc::new(FixtureSpatialStore), Srid::default());
    /// let state = HttpState::new(Arc::new(service));
    /// let _geometry = state.geometry.clone();
    /// ```
    pub fn new(geometry: Arc<dyn GeometryRequestHandler>) -> Self {
        Self { geometry }
    }
}
