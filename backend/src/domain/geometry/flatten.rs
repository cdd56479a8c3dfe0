//! Reduction of any geometry to the ordered points it contains.

use super::{Coordinate, Geometry};

impl Geometry {
    /// Every coordinate of this geometry in traversal order.
    ///
    /// Rings keep their closing vertex; collections concatenate their members
    /// in declaration order.
    ///
    /// # Examples
    /// ```
    /// use geojson_points::domain::geometry::{Coordinate, Geometry};
    ///
    /// let line = Geometry::LineString(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]);
    /// assert_eq!(line.flatten().len(), 2);
    /// ```
    pub fn flatten(&self) -> Vec<Coordinate> {
        let mut points = Vec::new();
        self.flatten_into(&mut points);
        points
    }

    fn flatten_into(&self, points: &mut Vec<Coordinate>) {
        match self {
            Self::Point(coordinate) => points.push(*coordinate),
            Self::MultiPoint(coordinates) | Self::LineString(coordinates) => {
                points.extend_from_slice(coordinates);
            }
            Self::MultiLineString(paths) | Self::Polygon(paths) => {
                points.extend(paths.iter().flatten().copied());
            }
            Self::MultiPolygon(polygons) => {
                points.extend(polygons.iter().flatten().flatten().copied());
            }
            Self::GeometryCollection(members) => {
                for member in members {
                    member.flatten_into(points);
                }
            }
        }
    }
}
