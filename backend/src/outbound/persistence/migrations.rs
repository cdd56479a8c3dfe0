//! Embedded schema migrations and point store maintenance.
//!
//! These run on a synchronous `PgConnection`; async callers move them onto a
//! blocking thread with `tokio::task::spawn_blocking`.

use diesel::pg::PgConnection;
use diesel::{Connection, RunQueryDsl, sql_query};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations from the `backend/migrations` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const TRUNCATE_POINTS_SQL: &str = "TRUNCATE TABLE geojson_points RESTART IDENTITY";

/// Failures raised while preparing the point store schema.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database could not be reached.
    #[error("failed to connect to the point store: {0}")]
    Connection(#[from] diesel::ConnectionError),
    /// A pending migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Migration {
        /// Error reported by the migration harness.
        message: String,
    },
    /// Truncating the point table failed.
    #[error("failed to reset stored points: {0}")]
    Reset(#[from] diesel::result::Error),
}

/// Apply every pending migration, returning how many ran.
///
/// # Errors
/// Returns [`MigrationError`] when the database is unreachable or a
/// migration fails.
pub fn apply_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let mut conn = PgConnection::establish(database_url)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Migration {
            message: err.to_string(),
        })?;
    info!(applied = applied.len(), "point store schema is current");
    Ok(applied.len())
}

/// Delete every stored point and restart identifier numbering.
///
/// # Errors
/// Returns [`MigrationError`] when the database is unreachable or the
/// table is missing.
pub fn truncate_points(database_url: &str) -> Result<(), MigrationError> {
    let mut conn = PgConnection::establish(database_url)?;
    sql_query(TRUNCATE_POINTS_SQL).execute(&mut conn)?;
    info!("stored points truncated");
    Ok(())
}
