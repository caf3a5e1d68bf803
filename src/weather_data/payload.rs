//! Serde model of the Open-Meteo forecast/archive response.
//!
//! Both endpoints answer with the same shape. Every field that the normalizer depends on
//! is optional here so a missing field is reported as a payload error instead of a
//! generic deserialization failure.

use serde::{Deserialize, Serialize};

/// Hourly variables requested from the provider, in query-string form.
pub const HOURLY_VARIABLES: &str = "wind_speed_10m,wind_direction_10m";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderPayload {
    /// Latitude of the grid cell the provider used.
    pub latitude: Option<f64>,
    /// Longitude of the grid cell the provider used.
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub utc_offset_seconds: Option<i32>,
    pub hourly_units: Option<HourlyUnits>,
    pub hourly: Option<HourlyBlock>,
}

/// The three parallel arrays; index `i` of each belongs to the same instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyBlock {
    pub time: Option<Vec<String>>,
    // The archive reports null for hours it has not ingested yet
    pub wind_speed_10m: Option<Vec<Option<f64>>>,
    pub wind_direction_10m: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyUnits {
    pub time: Option<String>,
    pub wind_speed_10m: Option<String>,
    pub wind_direction_10m: Option<String>,
}

impl ProviderPayload {
    /// Builds a payload from bare arrays, without any provider metadata.
    pub fn from_arrays(
        time: Vec<String>,
        wind_speed_10m: Vec<Option<f64>>,
        wind_direction_10m: Vec<Option<f64>>,
    ) -> Self {
        Self {
            hourly: Some(HourlyBlock {
                time: Some(time),
                wind_speed_10m: Some(wind_speed_10m),
                wind_direction_10m: Some(wind_direction_10m),
            }),
            ..Default::default()
        }
    }
}
