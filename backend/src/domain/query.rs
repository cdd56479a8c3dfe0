//! Store-facing operations built from classified requests.
//!
//! Each type here is the complete, typed input of one spatial store call.
//! Geometry reaches the store only as [`Ewkt`] or raw coordinates and is
//! always bound as a query parameter by the adapter.

use crate::domain::geometry::{Coordinate, Ewkt, Geometry, Path};
use crate::domain::{Error, Srid};

/// A decoded geometry paired with the SRID it was submitted under.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryInput {
    /// Decoded geometry.
    pub geometry: Geometry,
    /// Resolved spatial reference system.
    pub srid: Srid,
}

/// One point record to insert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointInsert {
    /// Position in the coordinate system named by `srid`.
    pub coordinate: Coordinate,
    /// SRID tagged on both the geometry and the `srid` column.
    pub srid: Srid,
}

/// All points one request inserts, in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsertBatch {
    points: Vec<PointInsert>,
}

impl InsertBatch {
    /// Flatten every input and tag each point with its input's SRID.
    ///
    /// # Examples
    /// ```
    /// use geojson_points::domain::geometry::{Coordinate, Geometry};
    /// use geojson_points::domain::query::{GeometryInput, InsertBatch};
    /// use geojson_points::domain::Srid;
    ///
    /// let input = GeometryInput {
    ///     geometry: Geometry::LineString(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]),
    ///     srid: Srid::new(4001).expect("valid srid"),
    /// };
    /// let batch = InsertBatch::from_inputs(&[input]);
    /// assert_eq!(batch.len(), 2);
    /// ```
    pub fn from_inputs(inputs: &[GeometryInput]) -> Self {
        let points = inputs
            .iter()
            .flat_map(|input| {
                input
                    .geometry
                    .flatten()
                    .into_iter()
                    .map(move |coordinate| PointInsert {
                        coordinate,
                        srid: input.srid,
                    })
            })
            .collect();
        Self { points }
    }

    /// Points to insert.
    pub fn points(&self) -> &[PointInsert] {
        &self.points
    }

    /// Number of points in the batch.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the batch inserts nothing.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Select stored points within `radius_meters` of a centre point.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusQuery {
    center: Ewkt,
    radius_meters: f64,
}

impl RadiusQuery {
    /// Build a radius query, rejecting negative or non-finite radii.
    pub fn new(center: Coordinate, srid: Srid, radius_meters: f64) -> Result<Self, Error> {
        if !radius_meters.is_finite() || radius_meters < 0.0 {
            return Err(Error::invalid_request(
                "radius must be a non-negative number of meters",
            ));
        }
        Ok(Self {
            center: Ewkt::point(center, srid),
            radius_meters,
        })
    }

    /// Query point as `SRID=<srid>;POINT(x y)`.
    pub fn center(&self) -> &Ewkt {
        &self.center
    }

    /// Maximum geographic distance in meters.
    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// SRID the query point was expressed in.
    pub fn srid(&self) -> Srid {
        self.center.srid()
    }
}

/// Select stored points contained by a polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonQuery {
    polygon: Ewkt,
}

impl PolygonQuery {
    /// Build a containment query.
    ///
    /// Every ring, exterior and interior, must be closed and hold at least
    /// four positions.
    pub fn new(rings: &[Path], srid: Srid) -> Result<Self, Error> {
        if rings.is_empty() || !rings.iter().all(|ring| is_closed_ring(ring)) {
            return Err(Error::invalid_geometry(
                "Polygon rings must be closed and contain at least four positions.",
            ));
        }
        Ok(Self {
            polygon: Ewkt::polygon(rings, srid),
        })
    }

    /// Polygon as `SRID=<srid>;POLYGON(...)`.
    pub fn polygon(&self) -> &Ewkt {
        &self.polygon
    }

    /// SRID the polygon was expressed in.
    pub fn srid(&self) -> Srid {
        self.polygon.srid()
    }
}

fn is_closed_ring(ring: &[Coordinate]) -> bool {
    match ring {
        [first, .., last] => ring.len() >= 4 && first == last,
        _ => false,
    }
}
