use serde::{Deserialize, Serialize};

/// A latitude/longitude pair identifying a point on the map.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq)
)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Validating constructor: rejects non-finite values and
    /// coordinates outside the WGS84 value ranges.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate::Latitude(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinate::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }
}

/// The rectangular visible region of the map, given by its
/// north-east and south-west corner coordinates.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq)
)]
pub struct BoundsBox {
    pub ne: Coordinate,
    pub sw: Coordinate,
}

/// An external record describing a point of interest.
///
/// The upstream place APIs deliver latitude/longitude either as JSON
/// numbers or as strings, so both fields stay in their raw shape here
/// and are coerced on demand via [`Place::coordinate`].
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct Place {
    pub name: String,
    pub latitude: CoordValue,
    pub longitude: CoordValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

impl Place {
    /// Coerces the raw latitude/longitude values into a validated
    /// [`Coordinate`].
    pub fn coordinate(&self) -> Result<Coordinate, InvalidCoordinate> {
        let lat = self.latitude.to_f64()?;
        let lng = self.longitude.to_f64()?;
        Coordinate::try_new(lat, lng)
    }
}

/// A number that might arrive as a JSON string.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub enum CoordValue {
    Number(f64),
    Text(String),
}

impl CoordValue {
    pub fn to_f64(&self) -> Result<f64, InvalidCoordinate> {
        match self {
            Self::Number(v) => Ok(*v),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| InvalidCoordinate::Unparsable(s.clone())),
        }
    }
}

impl From<f64> for CoordValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidCoordinate {
    #[error("latitude {0} is not a finite value within [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} is not a finite value within [-180, 180]")]
    Longitude(f64),
    #[error("coordinate value {0:?} is not numeric")]
    Unparsable(String),
}
