//! Geometry request orchestration service.
//!
//! Per request: classify, build the store operation, run it, summarise.
//! Every value derived from a request (SRID, geometry, results) lives on the
//! stack of [`GeometryRequestService::handle`]; the service itself only holds
//! the store handle and the configured default SRID.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{
    GeometryOutcome, GeometryRequest, GeometryRequestHandler, SpatialStore, SpatialStoreError,
};
use crate::domain::query::{GeometryInput, InsertBatch};
use crate::domain::request::{Operation, classify};
use crate::domain::{Error, Srid};

/// Domain service implementing the geometry endpoint.
#[derive(Clone)]
pub struct GeometryRequestService<S> {
    store: Arc<S>,
    default_srid: Srid,
}

impl<S> GeometryRequestService<S> {
    /// Create a service over `store`, tagging unqualified input with `default_srid`.
    pub fn new(store: Arc<S>, default_srid: Srid) -> Self {
        Self {
            store,
            default_srid,
        }
    }
}

#[async_trait]
impl<S> GeometryRequestHandler for GeometryRequestService<S>
where
    S: SpatialStore,
{
    async fn handle(&self, request: GeometryRequest) -> Result<GeometryOutcome, Error> {
        let operation = classify(&request, self.default_srid).inspect_err(|err| {
            debug!(code = ?err.code(), message = err.message(), "request rejected");
        })?;
        let label = operation.label();

        match operation {
            Operation::BulkInsertArray(inputs) => self.insert(label, &inputs).await,
            Operation::InsertGeometry(input) => {
                self.insert(label, std::slice::from_ref(&input)).await
            }
            Operation::RadiusQuery(query) => {
                let matches = self
                    .store
                    .query_within_radius(&query)
                    .await
                    .map_err(|err| map_store_error(label, err))?;
                info!(
                    operation = label,
                    srid = query.srid().get(),
                    radius_meters = query.radius_meters(),
                    matches = matches.len(),
                    "radius query completed"
                );
                Ok(GeometryOutcome::Matches(matches))
            }
            Operation::PolygonQuery(query) => {
                let matches = self
                    .store
                    .query_within_polygon(&query)
                    .await
                    .map_err(|err| map_store_error(label, err))?;
                info!(
                    operation = label,
                    srid = query.srid().get(),
                    matches = matches.len(),
                    "polygon query completed"
                );
                Ok(GeometryOutcome::Matches(matches))
            }
        }
    }
}

impl<S> GeometryRequestService<S>
where
    S: SpatialStore,
{
    async fn insert(
        &self,
        label: &'static str,
        inputs: &[GeometryInput],
    ) -> Result<GeometryOutcome, Error> {
        let kinds = inputs
            .iter()
            .map(|input| input.geometry.kind().as_str())
            .collect::<Vec<_>>();
        let batch = InsertBatch::from_inputs(inputs);
        if batch.is_empty() {
            info!(operation = label, ?kinds, inserted = 0, "nothing to insert");
            return Ok(GeometryOutcome::Inserted { count: 0 });
        }

        let count = self
            .store
            .insert_points(&batch)
            .await
            .map_err(|err| map_store_error(label, err))?;
        info!(operation = label, ?kinds, inserted = count, "points inserted");
        Ok(GeometryOutcome::Inserted { count })
    }
}

fn map_store_error(operation: &'static str, error: SpatialStoreError) -> Error {
    error!(operation, %error, "spatial store call failed");
    match error {
        SpatialStoreError::Connection { .. } => {
            Error::store_failure("The spatial store is unavailable.")
        }
        SpatialStoreError::Query { .. } => {
            Error::store_failure("The spatial store could not complete the request.")
        }
    }
}

#[cfg(test)]
#[path = "geometry_request_service_tests.rs"]
mod tests;
