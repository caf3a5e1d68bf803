//! CSV export of wind series, one row per hourly point.

use crate::types::wind_series::WindSeries;
use log::info;
use polars::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error writing '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to encode wind series as CSV")]
    Polars(#[from] PolarsError),
}

/// File name for a place's archived wind export: spaces become `_`.
///
/// ```rust
/// assert_eq!(
///     windscope::export_file_name("Chennai, India"),
///     "Chennai,_India_wind_history.csv"
/// );
/// ```
pub fn export_file_name(place: &str) -> String {
    format!("{}_wind_history.csv", place.replace(' ', "_"))
}

/// Writes `series` as CSV with the header `time,wind_speed,wind_dir`.
pub fn write_csv<W: Write>(series: &WindSeries, writer: W) -> Result<(), ExportError> {
    let mut frame = series.to_dataframe()?;
    CsvWriter::new(writer)
        .include_header(true)
        .finish(&mut frame)?;
    Ok(())
}

/// The CSV encoding of `series`, for handing to a download widget.
pub fn to_csv_bytes(series: &WindSeries) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    write_csv(series, &mut buffer)?;
    Ok(buffer)
}

/// Writes `series` to `dir/<export_file_name(place)>`, replacing any existing file, and
/// returns the path written.
pub fn export_csv(series: &WindSeries, place: &str, dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_file_name(place));
    let file = File::create(&path).map_err(|e| ExportError::Io(path.clone(), e))?;
    let mut writer = BufWriter::new(file);
    write_csv(series, &mut writer)?;
    writer
        .flush()
        .map_err(|e| ExportError::Io(path.clone(), e))?;

    info!("Exported {} rows to {}", series.len(), path.display());
    Ok(path)
}
