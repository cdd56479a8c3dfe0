//! Error mapping shared by the Diesel spatial store and its maintenance helpers.

use tracing::debug;

use crate::domain::ports::SpatialStoreError;

use super::pool::PoolError;

/// Map pool failures to a store connection error.
pub fn map_pool_error(error: PoolError) -> SpatialStoreError {
    SpatialStoreError::connection(error.message())
}

/// Map Diesel errors to store errors, keeping the driver message for logs.
pub fn map_diesel_error(error: diesel::result::Error, operation: &str) -> SpatialStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), operation, "diesel operation failed");
        }
        _ => debug!(%error, operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            SpatialStoreError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => {
            SpatialStoreError::query(format!("{operation}: {}", info.message()))
        }
        other => SpatialStoreError::query(format!("{operation}: {other}")),
    }
}
