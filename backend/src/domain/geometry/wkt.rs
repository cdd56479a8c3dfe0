//! Extended well-known text rendering for query geometries.

use geo_types::{Coord, LineString, Point, Polygon};
use wkt::ToWkt;

use super::{Coordinate, Path};
use crate::domain::Srid;

/// SRID-tagged well-known text, e.g. `SRID=4326;POINT(1 2)`.
///
/// Always handed to the store as a bound parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Ewkt {
    srid: Srid,
    text: String,
}

impl Ewkt {
    /// Tag a point with `srid`.
    ///
    /// # Examples
    /// ```
    /// use geojson_points::domain::Srid;
    /// use geojson_points::domain::geometry::{Coordinate, Ewkt};
    ///
    /// let srid = Srid::new(4326).expect("valid srid");
    /// let ewkt = Ewkt::point(Coordinate::new(-90.1775, 29.99778), srid);
    /// assert_eq!(ewkt.to_string(), "SRID=4326;POINT(-90.1775 29.99778)");
    /// ```
    pub fn point(coordinate: Coordinate, srid: Srid) -> Self {
        Self {
            srid,
            text: Point::from(coord(coordinate)).wkt_string(),
        }
    }

    /// Tag a polygon (exterior ring first) with `srid`.
    ///
    /// Rings are expected to be closed already; see
    /// [`PolygonQuery::new`](crate::domain::query::PolygonQuery::new).
    pub fn polygon(rings: &[Path], srid: Srid) -> Self {
        let mut rings = rings.iter().map(|ring| line_string(ring));
        let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
        let polygon = Polygon::new(exterior, rings.collect());
        Self {
            srid,
            text: polygon.wkt_string(),
        }
    }

    /// Reference system the text is tagged with.
    pub fn srid(&self) -> Srid {
        self.srid
    }
}

impl std::fmt::Display for Ewkt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SRID={};{}", self.srid, self.text)
    }
}

fn coord(coordinate: Coordinate) -> Coord<f64> {
    Coord {
        x: coordinate.x,
        y: coordinate.y,
    }
}

fn line_string(ring: &[Coordinate]) -> LineString<f64> {
    ring.iter().copied().map(coord).collect()
}
