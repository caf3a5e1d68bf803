//! Provides the `ForecastClient` for initiating hourly wind forecast requests.
//!
//! This client acts as an intermediate builder, obtained via [`WindData::forecast()`],
//! allowing the user to specify the target (a coordinate or a place name) before
//! executing the request.

use crate::wind_data::{check_forecast_days, DEFAULT_FORECAST_DAYS};
use crate::{Coordinate, WindData, WindError, WindSeries};
use bon::bon;

/// A client builder for fetching hourly wind forecasts.
///
/// Instances are created by calling [`WindData::forecast()`]. Calling
/// `.location(..).call()` or `.place(..).call()` executes the request and returns a
/// [`Result<WindSeries, WindError>`].
pub struct ForecastClient<'a> {
    client: &'a WindData,
}

#[bon]
impl<'a> ForecastClient<'a> {
    pub(crate) fn new(client: &'a WindData) -> Self {
        Self { client }
    }

    /// Initiates a builder to fetch the hourly wind forecast for a coordinate.
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `coordinate` - The [`Coordinate`] to forecast for.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.days(u8)`: Number of forecast days, `1..=5`. Defaults to `1`.
    ///
    /// # Returns
    ///
    /// After calling `.call().await`, a [`WindSeries`] with one point per forecast hour,
    /// in the location's local time.
    ///
    /// # Errors
    ///
    /// * [`WindError::InvalidForecastDays`]: `days` is outside `1..=5`. Nothing is sent.
    /// * [`WindError::Fetch`]: The request failed or the service answered with an error.
    /// * [`WindError::MalformedPayload`]: The response did not hold a valid hourly series.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use windscope::{Coordinate, WindData, WindError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), WindError> {
    /// let client = WindData::new()?;
    /// let chennai = Coordinate::new(13.08, 80.27)?;
    ///
    /// let forecast = client
    ///     .forecast()
    ///     .location(chennai) // Required: start builder with a coordinate
    ///     .days(3)           // Optional: defaults to 1
    ///     .call()
    ///     .await?;
    ///
    /// for point in forecast.iter().take(6) {
    ///     println!("{}: {:.1} m/s", point.timestamp, point.wind_speed_mps);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] coordinate: Coordinate,
        days: Option<u8>,
    ) -> Result<WindSeries, WindError> {
        self.client
            .fetch_forecast(coordinate, days.unwrap_or(DEFAULT_FORECAST_DAYS))
            .await
    }

    /// Initiates a builder to fetch the hourly wind forecast for a place name.
    ///
    /// The place is geocoded first; see [`WindData::locate()`]. Takes the same optional
    /// `.days(u8)` as [`ForecastClient::location`].
    ///
    /// # Errors
    ///
    /// Everything [`ForecastClient::location`] returns, plus [`WindError::NotFound`] if the
    /// place cannot be geocoded. In that case no forecast request is made.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use windscope::{WindData, WindError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), WindError> {
    /// let client = WindData::new()?;
    /// let forecast = client.forecast().place("Chennai, India").call().await?;
    /// assert_eq!(forecast.len(), 24);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = place)]
    #[doc(hidden)]
    pub async fn build_place(
        &self,
        #[builder(start_fn)] place: &str,
        days: Option<u8>,
    ) -> Result<WindSeries, WindError> {
        let days = check_forecast_days(days.unwrap_or(DEFAULT_FORECAST_DAYS))?;
        let coordinate = self.client.locate(place).await?;
        self.client.fetch_forecast(coordinate, days).await
    }
}
