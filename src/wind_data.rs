//! This module provides the main entry point of the crate, the [`WindData`] client.
//! It resolves place names to coordinates and fetches hourly wind forecasts and archived
//! wind data for them, returning normalized [`WindSeries`] values.

use crate::clients::forecast_client::ForecastClient;
use crate::clients::historical_client::HistoricalClient;
use crate::dashboard::{self, DashboardReport, HistoryReport};
use crate::error::WindError;
use crate::geocoding::geocoder::Geocoder;
use crate::types::coordinate::Coordinate;
use crate::types::historical_range::{ArchiveWindow, HistoricalRange};
use crate::types::wind_series::WindSeries;
use crate::weather_data::fetcher::WindFetcher;
use crate::weather_data::normalizer::normalize_value;
use bon::{bon, Builder};
use chrono::NaiveDate;
use std::ops::RangeInclusive;
use std::time::Duration;

pub const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";
/// Identifies this client to the geocoding service, as its usage policy requires.
pub const DEFAULT_USER_AGENT: &str = "WindDashboard/1.0";

pub const DEFAULT_FORECAST_DAYS: u8 = 1;
pub const FORECAST_DAYS: RangeInclusive<u8> = 1..=5;

/// Endpoints and transport settings for a [`WindData`] client.
///
/// All fields have defaults pointing at the public Nominatim and Open-Meteo services, so
/// usually only the ones that differ need to be set.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use windscope::WindDataConfig;
///
/// let config = WindDataConfig::builder()
///     .user_agent("MyWindApp/0.3 (ops@example.com)")
///     .timeout(Duration::from_secs(20))
///     .build();
/// assert_eq!(config.forecast_url, "https://api.open-meteo.com/v1/forecast");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct WindDataConfig {
    #[builder(into, default = DEFAULT_GEOCODING_URL.to_string())]
    pub geocoding_url: String,
    #[builder(into, default = DEFAULT_FORECAST_URL.to_string())]
    pub forecast_url: String,
    #[builder(into, default = DEFAULT_ARCHIVE_URL.to_string())]
    pub archive_url: String,
    #[builder(into, default = DEFAULT_USER_AGENT.to_string())]
    pub user_agent: String,
    /// Per-request timeout. Without one, the transport's default applies.
    pub timeout: Option<Duration>,
}

impl Default for WindDataConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// The main client for looking up places and fetching wind data.
///
/// Every operation is a short, strictly sequential chain of HTTP requests. Nothing is
/// cached between calls and nothing is retried; the first failure ends the operation.
///
/// # Examples
///
/// ```no_run
/// # use windscope::{WindData, WindError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), WindError> {
/// let client = WindData::new()?;
/// let chennai = client.locate("Chennai, India").await?;
/// let forecast = client.forecast().location(chennai).days(2).call().await?;
/// println!("{} hourly points", forecast.len());
/// # Ok(())
/// # }
/// ```
pub struct WindData {
    geocoder: Geocoder,
    fetcher: WindFetcher,
}

#[bon]
impl WindData {
    /// Creates a client for the public Nominatim and Open-Meteo services.
    ///
    /// # Errors
    ///
    /// Returns [`WindError::GeocoderInit`] or [`WindError::Fetch`] if an HTTP client
    /// cannot be initialized (e.g. no TLS backend available).
    pub fn new() -> Result<Self, WindError> {
        Self::with_config(WindDataConfig::default())
    }

    /// Creates a client with custom endpoints, user agent or timeout.
    pub fn with_config(config: WindDataConfig) -> Result<Self, WindError> {
        let geocoder = Geocoder::new(&config.geocoding_url, &config.user_agent, config.timeout)
            .map_err(WindError::GeocoderInit)?;
        let fetcher = WindFetcher::new(&config.forecast_url, &config.archive_url, config.timeout)?;
        Ok(Self { geocoder, fetcher })
    }

    /// Resolves a free-text place name (e.g. `"Chennai, India"`) to a [`Coordinate`].
    ///
    /// # Errors
    ///
    /// Returns [`WindError::NotFound`] when the name is empty, nothing matches, or the
    /// geocoding request fails for any reason. The underlying cause is kept as the
    /// error's source.
    pub async fn locate(&self, place: &str) -> Result<Coordinate, WindError> {
        self.geocoder
            .resolve(place)
            .await
            .map_err(|source| WindError::NotFound {
                place: place.to_string(),
                source,
            })
    }

    /// Starts a forecast request. See [`ForecastClient`].
    pub fn forecast(&self) -> ForecastClient<'_> {
        ForecastClient::new(self)
    }

    /// Starts a historical (archive) request. See [`HistoricalClient`].
    pub fn historical(&self) -> HistoricalClient<'_> {
        HistoricalClient::new(self)
    }

    /// Runs the dashboard pipeline for one place: geocode, then fetch and summarize the
    /// forecast.
    ///
    /// Archived data is a separate action, see [`WindData::dashboard_history`].
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.place(&str)`: **Required.** The place name to look up.
    /// * `.forecast_days(u8)`: Optional. Forecast length in days, `1..=5`. Defaults to `1`.
    ///
    /// # Returns
    ///
    /// A [`DashboardReport`] holding plain data for map, chart and metric rendering.
    ///
    /// # Errors
    ///
    /// The first failing step aborts the pipeline:
    /// * [`WindError::InvalidForecastDays`] before any request is made.
    /// * [`WindError::NotFound`] if the place cannot be geocoded; nothing is fetched.
    /// * [`WindError::Fetch`] / [`WindError::MalformedPayload`] from the forecast fetch.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use windscope::{WindData, WindError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), WindError> {
    /// let client = WindData::new()?;
    /// let report = client
    ///     .dashboard()
    ///     .place("Chennai, India")
    ///     .forecast_days(3)
    ///     .call()
    ///     .await?;
    ///
    /// println!(
    ///     "Average forecast wind {:.1} m/s from {}",
    ///     report.forecast_summary.average_speed_mps,
    ///     report.forecast_summary.latest_direction_compass
    /// );
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn dashboard(
        &self,
        place: &str,
        forecast_days: Option<u8>,
    ) -> Result<DashboardReport, WindError> {
        let days = forecast_days.unwrap_or(DEFAULT_FORECAST_DAYS);
        dashboard::run(self, place, days).await
    }

    /// Fetches and summarizes archived data for the place of an existing
    /// [`DashboardReport`], without geocoding it again.
    ///
    /// A failure here leaves the report untouched, so map, charts and metrics stay
    /// available while only the history (and its CSV download) is missing.
    ///
    /// # Arguments
    ///
    /// * `.report(&DashboardReport)`: **Required.** The report to extend.
    /// * `.range(HistoricalRange)`: **Required.** How far back to go.
    /// * `.end_date(NaiveDate)`: Optional. Last day of the window. Defaults to today (UTC).
    ///
    /// # Errors
    ///
    /// [`WindError::Fetch`] / [`WindError::MalformedPayload`] from the archive fetch.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use windscope::{default_export_dir, HistoricalRange, WindData, WindError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), WindError> {
    /// let client = WindData::new()?;
    /// let report = client.dashboard().place("Chennai, India").call().await?;
    ///
    /// let history = client
    ///     .dashboard_history()
    ///     .report(&report)
    ///     .range(HistoricalRange::OneMonth)
    ///     .call()
    ///     .await?;
    /// history.export_csv(&default_export_dir())?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn dashboard_history(
        &self,
        report: &DashboardReport,
        range: HistoricalRange,
        end_date: Option<NaiveDate>,
    ) -> Result<HistoryReport, WindError> {
        let window = match end_date {
            Some(end_date) => ArchiveWindow::ending(range, end_date),
            None => ArchiveWindow::ending_today(range),
        };
        dashboard::run_history(self, report, window, range).await
    }

    pub(crate) async fn fetch_forecast(
        &self,
        coordinate: Coordinate,
        days: u8,
    ) -> Result<WindSeries, WindError> {
        let days = check_forecast_days(days)?;
        let raw = self.fetcher.forecast(coordinate, days).await?;
        Ok(normalize_value(raw)?)
    }

    pub(crate) async fn fetch_historical(
        &self,
        coordinate: Coordinate,
        window: ArchiveWindow,
    ) -> Result<WindSeries, WindError> {
        let raw = self.fetcher.historical(coordinate, window).await?;
        Ok(normalize_value(raw)?)
    }
}

pub(crate) fn check_forecast_days(days: u8) -> Result<u8, WindError> {
    if FORECAST_DAYS.contains(&days) {
        Ok(days)
    } else {
        Err(WindError::InvalidForecastDays(days))
    }
}
