//! Driven port for persisting and selecting point records.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::define_port_error;
use crate::domain::query::{InsertBatch, PolygonQuery, RadiusQuery};

/// Read-only projection of one stored point.
///
/// Serialises as `{"point": "POINT(x y)"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PointResult {
    /// Well-known text of the stored geometry.
    #[schema(example = "POINT(-90.071533 29.951065)")]
    pub point: String,
}

impl PointResult {
    /// Wrap a well-known-text point.
    pub fn new(point: impl Into<String>) -> Self {
        Self {
            point: point.into(),
        }
    }
}

define_port_error! {
    /// Errors raised by spatial store adapters.
    pub enum SpatialStoreError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "spatial store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "spatial store query failed: {message}",
    }
}

/// Port for the point store and its spatial predicates.
///
/// Distance and containment are evaluated by the store; callers only supply
/// SRID-tagged geometry and numeric parameters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpatialStore: Send + Sync {
    /// Insert every point of `batch`, returning how many rows were written.
    ///
    /// Implementations insert the whole batch or nothing.
    async fn insert_points(&self, batch: &InsertBatch) -> Result<usize, SpatialStoreError>;

    /// Points whose geographic distance to the query centre is at most the radius.
    async fn query_within_radius(
        &self,
        query: &RadiusQuery,
    ) -> Result<Vec<PointResult>, SpatialStoreError>;

    /// Points contained by the query polygon.
    async fn query_within_polygon(
        &self,
        query: &PolygonQuery,
    ) -> Result<Vec<PointResult>, SpatialStoreError>;
}

/// Fixture implementation for tests that do not exercise persistence.
///
/// Accepts every insert and matches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSpatialStore;

#[async_trait]
impl SpatialStore for FixtureSpatialStore {
    async fn insert_points(&self, batch: &InsertBatch) -> Result<usize, SpatialStoreError> {
        Ok(batch.len())
    }

    async fn query_within_radius(
        &self,
        _query: &RadiusQuery,
    ) -> Result<Vec<PointResult>, SpatialStoreError> {
        Ok(Vec::new())
    }

    async fn query_within_polygon(
        &self,
        _query: &PolygonQuery,
    ) -> Result<Vec<PointResult>, SpatialStoreError> {
        Ok(Vec::new())
    }
}
