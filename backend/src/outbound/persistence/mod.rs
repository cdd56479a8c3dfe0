//! PostgreSQL/PostGIS persistence adapters using Diesel.
//!
//! - **Thin adapters**: the store only translates between bound SQL
//!   parameters and domain types. No classification happens here.
//! - **Async-safe pooling**: connections come from a `bb8` pool through
//!   `diesel-async`.
//! - **Strongly typed errors**: pool and Diesel failures map to
//!   [`SpatialStoreError`](crate::domain::ports::SpatialStoreError).
//!
//! ```ignore
//! use geojson_points::outbound::persistence::{DbPool, DieselSpatialStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/points")).await?;
//! let store = DieselSpatialStore::new(pool);
//! ```

mod diesel_helpers;
mod diesel_spatial_store;
mod migrations;
mod pool;

pub use diesel_spatial_store::DieselSpatialStore;
pub use migrations::{MIGRATIONS, MigrationError, apply_migrations, truncate_points};
pub use pool::{DbPool, PoolConfig, PoolError};
