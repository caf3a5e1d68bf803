//! Defines the [`Coordinate`] type used to address forecasts and archive requests.

use haversine::{distance, Location as HaversineLocation, Units};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a latitude/longitude pair falls outside the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Coordinate out of range: latitude {latitude} must be in [-90, 90] and longitude {longitude} in [-180, 180]")]
pub struct InvalidCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A geographical coordinate in decimal degrees.
///
/// A `Coordinate` can only be built through [`Coordinate::new`], which guarantees that the
/// latitude lies in `[-90, 90]` and the longitude in `[-180, 180]`.
///
/// # Examples
///
/// ```
/// use windscope::Coordinate;
///
/// let chennai = Coordinate::new(13.0837, 80.2702).unwrap();
/// assert_eq!(chennai.latitude(), 13.0837);
/// assert_eq!(chennai.longitude(), 80.2702);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Creates a coordinate, rejecting values outside the valid latitude/longitude range.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinate`] if the latitude is outside `[-90, 90]`, the longitude
    /// is outside `[-180, 180]`, or either value is not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if lat_ok && lon_ok {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other` in kilometers.
    ///
    /// Useful to see how far the weather model's grid cell is from the geocoded point.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        distance(
            HaversineLocation {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            HaversineLocation {
                latitude: other.latitude,
                longitude: other.longitude,
            },
            Units::Kilometers,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_and_nan() {
        assert!(Coordinate::new(90.1, 0.0).is_err());
        assert!(Coordinate::new(0.0, -180.5).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_distance_km() {
        let chennai = Coordinate::new(13.0837, 80.2702).unwrap();
        let bengaluru = Coordinate::new(12.9716, 77.5946).unwrap();
        let dist = chennai.distance_km(&bengaluru);
        // Roughly 290 km as the crow flies
        assert!(dist > 280.0 && dist < 300.0, "unexpected distance {dist}");
        assert_eq!(chennai.distance_km(&chennai), 0.0);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<Coordinate, _> =
            serde_json::from_str(r#"{"latitude": 52.52, "longitude": 13.4}"#);
        assert!(ok.is_ok());
        let bad: Result<Coordinate, _> =
            serde_json::from_str(r#"{"latitude": 152.52, "longitude": 13.4}"#);
        assert!(bad.is_err());
    }
}
