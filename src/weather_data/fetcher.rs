use crate::types::coordinate::Coordinate;
use crate::types::historical_range::ArchiveWindow;
use crate::weather_data::error::FetchError;
use crate::weather_data::payload::HOURLY_VARIABLES;
use log::{info, warn};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Serialize)]
struct ForecastQuery<'a> {
    latitude: f64,
    longitude: f64,
    hourly: &'a str,
    forecast_days: u8,
    timezone: &'a str,
    wind_speed_unit: &'a str,
}

#[derive(Serialize)]
struct ArchiveQuery<'a> {
    latitude: f64,
    longitude: f64,
    start_date: String,
    end_date: String,
    hourly: &'a str,
    timezone: &'a str,
    wind_speed_unit: &'a str,
}

// Body of a rejected request, e.g. {"error": true, "reason": "..."}
#[derive(Deserialize)]
struct ApiErrorBody {
    reason: String,
}

/// Fetches raw hourly wind payloads from the forecast and archive endpoints.
///
/// Every call is a single request; nothing is retried or cached.
pub struct WindFetcher {
    forecast_url: String,
    archive_url: String,
    client: Client,
}

impl WindFetcher {
    pub fn new(
        forecast_url: &str,
        archive_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            forecast_url: forecast_url.to_string(),
            archive_url: archive_url.to_string(),
            client: builder.build().map_err(FetchError::ClientBuild)?,
        })
    }

    /// Requests `days` days of hourly forecast starting now, in the location's local time.
    ///
    /// The caller is responsible for keeping `days` within the range the dashboard offers.
    pub async fn forecast(
        &self,
        coordinate: Coordinate,
        days: u8,
    ) -> Result<serde_json::Value, FetchError> {
        let query = ForecastQuery {
            latitude: coordinate.latitude(),
            longitude: coordinate.longitude(),
            hourly: HOURLY_VARIABLES,
            forecast_days: days,
            timezone: "auto",
            wind_speed_unit: "ms",
        };
        info!(
            "Requesting {} day wind forecast for ({}, {})",
            days,
            coordinate.latitude(),
            coordinate.longitude()
        );
        self.get(&self.forecast_url, &query).await
    }

    /// Requests archived hourly values for the closed date range of `window`.
    pub async fn historical(
        &self,
        coordinate: Coordinate,
        window: ArchiveWindow,
    ) -> Result<serde_json::Value, FetchError> {
        let query = ArchiveQuery {
            latitude: coordinate.latitude(),
            longitude: coordinate.longitude(),
            start_date: window.start_date.format(DATE_FORMAT).to_string(),
            end_date: window.end_date.format(DATE_FORMAT).to_string(),
            hourly: HOURLY_VARIABLES,
            timezone: "auto",
            wind_speed_unit: "ms",
        };
        info!(
            "Requesting archived wind data for ({}, {}) from {} to {}",
            coordinate.latitude(),
            coordinate.longitude(),
            query.start_date,
            query.end_date
        );
        self.get(&self.archive_url, &query).await
    }

    async fn get<Q: Serialize>(
        &self,
        url: &str,
        query: &Q,
    ) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;

        let response = Self::check_status(url, response).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Body(url.to_string(), e))?;

        // Only well-formedness is checked here; the shape is the normalizer's concern
        serde_json::from_slice(&bytes).map_err(|e| FetchError::JsonParse(url.to_string(), e))
    }

    async fn check_status(url: &str, response: Response) -> Result<Response, FetchError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        warn!("HTTP error for {}: {}", url, status);

        let source = response.error_for_status_ref().err();
        let reason = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .map(|body| body.reason);

        Err(match (reason, source) {
            (Some(reason), _) => FetchError::Api {
                url: url.to_string(),
                status,
                reason,
            },
            (None, Some(source)) => FetchError::HttpStatus {
                url: url.to_string(),
                status,
                source,
            },
            (None, None) => FetchError::Api {
                url: url.to_string(),
                status,
                reason: "unexpected response status".to_string(),
            },
        })
    }
}
