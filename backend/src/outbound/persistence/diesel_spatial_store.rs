//! PostGIS-backed `SpatialStore` implementation using Diesel.
//!
//! PostGIS geometry has no Diesel column type, so every statement is a raw
//! `sql_query` with bound parameters. Geometry crosses the boundary as EWKT
//! text or as bare `f64` ordinates; nothing from a request is formatted into
//! SQL.

use async_trait::async_trait;
use diesel::sql_query;
use diesel::sql_types::{Double, Integer, Text};
use diesel::QueryableByName;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{PointResult, SpatialStore, SpatialStoreError};
use crate::domain::query::{InsertBatch, PolygonQuery, RadiusQuery};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::pool::DbPool;

/// Insert one point, tagging both the geometry and the `srid` column.
pub(crate) const INSERT_POINT_SQL: &str = "INSERT INTO geojson_points (point_geom, srid) \
     VALUES (ST_SetSRID(ST_MakePoint($1, $2), $3), $3)";

/// Stored points within `$2` meters of the EWKT point `$1`, compared on the
/// WGS 84 spheroid.
pub(crate) const RADIUS_QUERY_SQL: &str = r#"
SELECT ST_AsText(gp.point_geom) AS point
FROM geojson_points gp
WHERE ST_DWithin(
    ST_Transform(ST_GeomFromEWKT($1), 4326)::geography,
    ST_Transform(gp.point_geom, 4326)::geography,
    $2
)
ORDER BY gp.point_id
"#;

/// Stored points inside the EWKT polygon `$1`, both reprojected to WGS 84.
pub(crate) const POLYGON_QUERY_SQL: &str = r#"
SELECT ST_AsText(gp.point_geom) AS point
FROM geojson_points gp
WHERE ST_Contains(
    ST_Transform(ST_GeomFromEWKT($1), 4326),
    ST_Transform(gp.point_geom, 4326)
)
ORDER BY gp.point_id
"#;

#[derive(Debug, QueryableByName)]
struct PointRow {
    #[diesel(sql_type = Text)]
    point: String,
}

impl From<PointRow> for PointResult {
    fn from(row: PointRow) -> Self {
        PointResult::new(row.point)
    }
}

fn into_results(operation: &'static str, rows: Vec<PointRow>) -> Vec<PointResult> {
    debug!(operation, rows = rows.len(), "spatial query returned");
    rows.into_iter().map(PointResult::from).collect()
}

/// Diesel-backed implementation of the spatial store port.
#[derive(Clone)]
pub struct DieselSpatialStore {
    pool: DbPool,
}

impl DieselSpatialStore {
    /// Create a store over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpatialStore for DieselSpatialStore {
    async fn insert_points(&self, batch: &InsertBatch) -> Result<usize, SpatialStoreError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                let mut inserted = 0;
                for point in batch.points() {
                    inserted += sql_query(INSERT_POINT_SQL)
                        .bind::<Double, _>(point.coordinate.x)
                        .bind::<Double, _>(point.coordinate.y)
                        .bind::<Integer, _>(point.srid.get())
                        .execute(conn)
                        .await?;
                }
                Ok(inserted)
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| map_diesel_error(err, "insert points"))
    }

    async fn query_within_radius(
        &self,
        query: &RadiusQuery,
    ) -> Result<Vec<PointResult>, SpatialStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PointRow> = sql_query(RADIUS_QUERY_SQL)
            .bind::<Text, _>(query.center().to_string())
            .bind::<Double, _>(query.radius_meters())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "radius query"))?;
        Ok(into_results("radius query", rows))
    }

    async fn query_within_polygon(
        &self,
        query: &PolygonQuery,
    ) -> Result<Vec<PointResult>, SpatialStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PointRow> = sql_query(POLYGON_QUERY_SQL)
            .bind::<Text, _>(query.polygon().to_string())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "polygon query"))?;
        Ok(into_results("polygon query", rows))
    }
}
