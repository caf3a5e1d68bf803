mod clients;
mod dashboard;
mod error;
mod export;
mod geocoding;
mod types;
mod utils;
mod weather_data;
mod wind_data;

#[cfg(test)]
mod test_support;

pub use error::WindError;
pub use wind_data::*;

pub use clients::forecast_client::*;
pub use clients::historical_client::*;

pub use dashboard::{DashboardReport, HistoryReport, MapView, MAP_ZOOM};
pub use export::{export_csv, export_file_name, to_csv_bytes, write_csv, ExportError};
pub use utils::default_export_dir;

pub use types::compass::CompassDirection;
pub use types::coordinate::{Coordinate, InvalidCoordinate};
pub use types::historical_range::{ArchiveWindow, HistoricalRange, UnknownHistoricalRange};
pub use types::summary::{summarize, SummaryError, SummaryStats};
pub use types::wind_series::{TimePoint, WindSeries, TIMESTAMP_FORMAT};

pub use geocoding::error::GeocodeError;
pub use geocoding::geocoder::Geocoder;
pub use weather_data::error::{FetchError, PayloadError};
pub use weather_data::fetcher::WindFetcher;
pub use weather_data::normalizer::normalize;
pub use weather_data::payload::{HourlyBlock, HourlyUnits, ProviderPayload, HOURLY_VARIABLES};
