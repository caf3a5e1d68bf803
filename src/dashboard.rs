//! The dashboard pipeline: everything one "look up this place" action produces, plus the
//! separate "show me the history" action that builds on it.
//!
//! The reports hold plain data only. Drawing the map, charts and metrics is left to
//! whatever front end consumes them.

use crate::export::{export_csv, export_file_name};
use crate::types::coordinate::Coordinate;
use crate::types::historical_range::{ArchiveWindow, HistoricalRange};
use crate::types::summary::{summarize, SummaryStats};
use crate::types::wind_series::WindSeries;
use crate::wind_data::{check_forecast_days, WindData};
use crate::WindError;
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const MAP_ZOOM: u8 = 8;

/// Where to center the map, and what the marker says.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub tooltip: String,
}

impl MapView {
    pub fn new(center: Coordinate, place: &str) -> Self {
        Self {
            center,
            zoom: MAP_ZOOM,
            tooltip: place.to_string(),
        }
    }
}

/// Result of looking up a place: map, forecast and its summary.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// The place name as entered.
    pub place: String,
    pub coordinate: Coordinate,
    pub map: MapView,
    pub forecast: WindSeries,
    pub forecast_summary: SummaryStats,
}

/// Archived data for one [`HistoricalRange`], with its summary.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryReport {
    pub place: String,
    pub range: HistoricalRange,
    pub window: ArchiveWindow,
    pub series: WindSeries,
    pub summary: SummaryStats,
}

impl HistoryReport {
    /// Name of the CSV file offered for download, see [`export_file_name`].
    pub fn csv_file_name(&self) -> String {
        export_file_name(&self.place)
    }

    /// Writes the archived series to `dir` as CSV and returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`WindError::Export`] if the file cannot be written.
    pub fn export_csv(&self, dir: &Path) -> Result<PathBuf, WindError> {
        Ok(export_csv(&self.series, &self.place, dir)?)
    }
}

pub(crate) async fn run(
    client: &WindData,
    place: &str,
    forecast_days: u8,
) -> Result<DashboardReport, WindError> {
    let forecast_days = check_forecast_days(forecast_days)?;
    let coordinate = client.locate(place).await?;

    let forecast = client.fetch_forecast(coordinate, forecast_days).await?;
    let forecast_summary = summarize(&forecast)?;

    info!(
        "Dashboard for '{}': {} forecast hours",
        place,
        forecast.len()
    );

    Ok(DashboardReport {
        place: place.to_string(),
        coordinate,
        map: MapView::new(coordinate, place),
        forecast,
        forecast_summary,
    })
}

pub(crate) async fn run_history(
    client: &WindData,
    report: &DashboardReport,
    window: ArchiveWindow,
    range: HistoricalRange,
) -> Result<HistoryReport, WindError> {
    let series = client.fetch_historical(report.coordinate, window).await?;
    let summary = summarize(&series)?;

    info!(
        "History for '{}' over {}: {} archived hours",
        report.place,
        range,
        series.len()
    );

    Ok(HistoryReport {
        place: report.place.clone(),
        range,
        window,
        series,
        summary,
    })
}
