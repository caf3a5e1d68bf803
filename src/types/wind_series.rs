//! Contains the canonical wind time series produced from provider payloads.

use crate::types::coordinate::Coordinate;
use chrono::{FixedOffset, NaiveDateTime};
use polars::df;
use polars::prelude::{DataFrame, PolarsResult};
use serde::{Deserialize, Serialize};

/// Format used for timestamps in exports and data frames, matching the provider's own.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One hourly observation or forecast value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Wall-clock time at the location (the provider resolves the timezone).
    pub timestamp: NaiveDateTime,
    /// Wind speed at 10 m in meters per second, never negative.
    pub wind_speed_mps: f64,
    /// Wind direction at 10 m in degrees clockwise from true north, in `[0, 360)`.
    pub wind_direction_deg: f64,
}

/// An ordered, non-empty sequence of [`TimePoint`]s for one location.
///
/// Timestamps are strictly increasing and each appears once. A `WindSeries` is created by
/// [`crate::normalize`] from a provider payload and is otherwise read-only, so these
/// guarantees hold for every instance handed out by the crate.
///
/// Forecast and historical series are independent values; nothing merges them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindSeries {
    pub(crate) points: Vec<TimePoint>,
    /// Grid cell the provider actually used, which may differ slightly from the request.
    pub(crate) grid_location: Option<Coordinate>,
    /// IANA timezone name resolved by the provider (e.g. "Asia/Kolkata").
    pub(crate) timezone: Option<String>,
    pub(crate) utc_offset_seconds: i32,
}

impl WindSeries {
    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimePoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&TimePoint> {
        self.points.first()
    }

    /// The most recent point.
    pub fn last(&self) -> Option<&TimePoint> {
        self.points.last()
    }

    pub fn grid_location(&self) -> Option<Coordinate> {
        self.grid_location
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn utc_offset_seconds(&self) -> i32 {
        self.utc_offset_seconds
    }

    /// The UTC offset of the location's timestamps, if it is a valid offset.
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_seconds)
    }

    /// Converts the series into a Polars `DataFrame` with columns `time` (string,
    /// `YYYY-MM-DDTHH:MM`), `wind_speed` and `wind_dir`.
    ///
    /// This is the tabular shape used for CSV export and handed to charting code.
    ///
    /// # Errors
    ///
    /// Returns a [`polars::prelude::PolarsError`] if the frame cannot be assembled.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let times: Vec<String> = self
            .points
            .iter()
            .map(|p| p.timestamp.format(TIMESTAMP_FORMAT).to_string())
            .collect();
        let speeds: Vec<f64> = self.points.iter().map(|p| p.wind_speed_mps).collect();
        let directions: Vec<f64> = self.points.iter().map(|p| p.wind_direction_deg).collect();

        df!(
            "time" => times,
            "wind_speed" => speeds,
            "wind_dir" => directions
        )
    }
}

impl<'a> IntoIterator for &'a WindSeries {
    type Item = &'a TimePoint;
    type IntoIter = std::slice::Iter<'a, TimePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
