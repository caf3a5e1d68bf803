//! Scalar statistics derived from a [`WindSeries`].

use crate::types::compass::CompassDirection;
use crate::types::wind_series::WindSeries;
use chrono::NaiveDateTime;
use ordered_float::OrderedFloat;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("Cannot summarize an empty wind series")]
    EmptySeries,
}

/// Summary of a wind series, as shown next to the charts.
///
/// Recomputed on demand with [`summarize`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Arithmetic mean of all wind speeds, in m/s.
    pub average_speed_mps: f64,
    /// Direction of the most recent point, in degrees.
    pub latest_direction_deg: f64,
    /// Compass label for `latest_direction_deg`.
    pub latest_direction_compass: CompassDirection,
    /// Highest wind speed in the series, in m/s.
    pub peak_speed_mps: f64,
    /// Timestamp of the first point reaching `peak_speed_mps`.
    pub peak_at: NaiveDateTime,
    pub sample_count: usize,
}

/// Computes [`SummaryStats`] for a series.
///
/// # Errors
///
/// Returns [`SummaryError::EmptySeries`] if the series has no points.
///
/// # Examples
///
/// ```rust
/// # use windscope::{summarize, WindError, WindSeries};
/// # fn run(series: WindSeries) -> Result<(), WindError> {
/// let stats = summarize(&series)?;
/// println!(
///     "Average {:.1} m/s, now blowing from {}",
///     stats.average_speed_mps, stats.latest_direction_compass
/// );
/// # Ok(())
/// # }
/// ```
pub fn summarize(series: &WindSeries) -> Result<SummaryStats, SummaryError> {
    let points = series.points();
    let latest = points.last().ok_or(SummaryError::EmptySeries)?;

    let total: f64 = points.iter().map(|p| p.wind_speed_mps).sum();
    let average_speed_mps = total / points.len() as f64;

    // max_by_key keeps the last maximum, so search in reverse to report the first one
    let peak = points
        .iter()
        .rev()
        .max_by_key(|p| OrderedFloat(p.wind_speed_mps))
        .unwrap_or(latest);

    Ok(SummaryStats {
        average_speed_mps,
        latest_direction_deg: latest.wind_direction_deg,
        latest_direction_compass: CompassDirection::from_degrees(latest.wind_direction_deg),
        peak_speed_mps: peak.wind_speed_mps,
        peak_at: peak.timestamp,
        sample_count: points.len(),
    })
}
