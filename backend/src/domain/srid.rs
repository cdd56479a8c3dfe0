//! Spatial reference identifiers and their resolution from request bodies.

use serde_json::Value;

use crate::domain::Error;

/// Highest SRID PostGIS accepts for user-defined reference systems.
const MAX_SRID: i32 = 998_999;

/// Geographic reference system (WGS 84) used for distance and containment.
pub const GEOGRAPHIC_SRID: Srid = Srid(4326);

/// Spatial Reference Identifier naming a coordinate system.
///
/// ## Invariants
/// - Always within `1..=998999`.
///
/// # Examples
/// ```
/// use geojson_points::domain::Srid;
///
/// let srid = Srid::new(3857).expect("valid srid");
/// assert_eq!(srid.get(), 3857);
/// assert!(Srid::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srid(i32);

/// Validation failures raised when constructing a [`Srid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SridValidationError {
    /// The identifier fell outside the accepted range.
    #[error("srid must be between 1 and 998999, got {value}")]
    OutOfRange {
        /// Rejected value.
        value: i64,
    },
}

impl Srid {
    /// Validate and wrap a numeric identifier.
    pub fn new(value: i64) -> Result<Self, SridValidationError> {
        i32::try_from(value)
            .ok()
            .filter(|candidate| (1..=MAX_SRID).contains(candidate))
            .map(Self)
            .ok_or(SridValidationError::OutOfRange { value })
    }

    /// Raw identifier as stored in the database.
    #[rustfmt::skip]
    pub fn get(self) -> i32 { self.0 }
}

impl Default for Srid {
    fn default() -> Self {
        GEOGRAPHIC_SRID
    }
}

impl std::fmt::Display for Srid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Srid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(Error::invalid_request("srid must be a string of digits"));
        }
        let value = digits
            .parse::<i64>()
            .map_err(|_| Error::invalid_request("srid must be a string of digits"))?;
        Self::new(value).map_err(|err| Error::invalid_request(err.to_string()))
    }
}

/// Resolve the SRID carried by an optional `srid` member of a request body.
///
/// Absent, `null`, and empty-string values select `default`. Integers and
/// strings of digits are accepted; anything else is an
/// [`ErrorCode::InvalidRequest`](crate::domain::ErrorCode::InvalidRequest).
pub fn resolve_srid(raw: Option<&Value>, default: Srid) -> Result<Srid, Error> {
    match raw {
        None | Some(Value::Null) => Ok(default),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(default),
        Some(Value::String(text)) => text.parse(),
        Some(Value::Number(number)) => {
            let value = number
                .as_i64()
                .ok_or_else(|| Error::invalid_request("srid must be an integer"))?;
            Srid::new(value).map_err(|err| Error::invalid_request(err.to_string()))
        }
        Some(_) => Err(Error::invalid_request(
            "srid must be an integer or a string of digits",
        )),
    }
}
