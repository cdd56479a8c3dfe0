//! Typed geometry values decoded from GeoJSON request bodies.
//!
//! A [`Geometry`] exists only for the duration of one request. It is produced
//! by [`decode_geometry`], reduced to point coordinates by
//! [`Geometry::flatten`], and rendered as SRID-tagged well-known text through
//! [`Ewkt`] when a query needs it.

mod decode;
mod flatten;
mod wkt;

pub use decode::decode_geometry;
pub use wkt::Ewkt;

/// One `(x, y)` coordinate pair. Extra ordinates are discarded on decode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Easting or longitude.
    pub x: f64,
    /// Northing or latitude.
    pub y: f64,
}

impl Coordinate {
    /// Build a coordinate pair.
    #[rustfmt::skip]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// A linear ring or line: an ordered sequence of coordinates.
pub type Path = Vec<Coordinate>;

/// The finite set of geometry kinds the service understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A single position.
    Point(Coordinate),
    /// Several unconnected positions.
    MultiPoint(Vec<Coordinate>),
    /// A connected sequence of positions.
    LineString(Path),
    /// Several line strings.
    MultiLineString(Vec<Path>),
    /// An exterior ring followed by optional interior rings.
    Polygon(Vec<Path>),
    /// Several polygons.
    MultiPolygon(Vec<Vec<Path>>),
    /// Nested geometries in declaration order.
    GeometryCollection(Vec<Geometry>),
}

/// Discriminant of a [`Geometry`], recorded on insert log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// [`Geometry::Point`].
    Point,
    /// [`Geometry::MultiPoint`].
    MultiPoint,
    /// [`Geometry::LineString`].
    LineString,
    /// [`Geometry::MultiLineString`].
    MultiLineString,
    /// [`Geometry::Polygon`].
    Polygon,
    /// [`Geometry::MultiPolygon`].
    MultiPolygon,
    /// [`Geometry::GeometryCollection`].
    GeometryCollection,
}

impl Geometry {
    /// Kind of this geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Point(_) => GeometryKind::Point,
            Self::MultiPoint(_) => GeometryKind::MultiPoint,
            Self::LineString(_) => GeometryKind::LineString,
            Self::MultiLineString(_) => GeometryKind::MultiLineString,
            Self::Polygon(_) => GeometryKind::Polygon,
            Self::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Self::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }
}

impl GeometryKind {
    /// GeoJSON type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }
}

#[cfg(test)]
mod tests;
