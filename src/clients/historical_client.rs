//! Provides the `HistoricalClient` for requesting archived hourly wind data.
//!
//! Obtained via [`WindData::historical()`]. The archive is addressed by one of the fixed
//! [`HistoricalRange`]s, counted back from an end date.

use crate::{ArchiveWindow, Coordinate, HistoricalRange, WindData, WindError, WindSeries};
use bon::bon;
use chrono::NaiveDate;

/// A client builder for fetching archived hourly wind data.
///
/// Instances are created by calling [`WindData::historical()`].
pub struct HistoricalClient<'a> {
    client: &'a WindData,
}

#[bon]
impl<'a> HistoricalClient<'a> {
    pub(crate) fn new(client: &'a WindData) -> Self {
        Self { client }
    }

    /// Initiates a builder to fetch archived wind data for a coordinate.
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `coordinate` - The [`Coordinate`] to fetch data for.
    ///
    /// # Builder Methods
    ///
    /// * `.range(HistoricalRange)`: **Required.** How far back to go.
    /// * `.end_date(NaiveDate)`: Optional. Last day of the window. Defaults to today (UTC).
    ///
    /// # Returns
    ///
    /// A [`WindSeries`] covering `end_date - range.days() ..= end_date`. The archive lags
    /// behind real time, so the most recent hours are typically absent; they are reported
    /// as nulls by the service and skipped.
    ///
    /// # Errors
    ///
    /// * [`WindError::Fetch`]: The request failed or the service rejected the window.
    /// * [`WindError::MalformedPayload`]: The response did not hold a valid hourly series,
    ///   including the case where every value in the window is missing.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use windscope::{Coordinate, HistoricalRange, WindData, WindError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), WindError> {
    /// let client = WindData::new()?;
    /// let history = client
    ///     .historical()
    ///     .location(Coordinate::new(13.08, 80.27)?)
    ///     .range(HistoricalRange::OneMonth)
    ///     .call()
    ///     .await?;
    /// println!("{} archived hours", history.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] coordinate: Coordinate,
        range: HistoricalRange,
        end_date: Option<NaiveDate>,
    ) -> Result<WindSeries, WindError> {
        let window = match end_date {
            Some(end_date) => ArchiveWindow::ending(range, end_date),
            None => ArchiveWindow::ending_today(range),
        };
        self.client.fetch_historical(coordinate, window).await
    }

    /// Initiates a builder to fetch archived wind data for a place name.
    ///
    /// Takes the same `.range()` and `.end_date()` as [`HistoricalClient::location`]. Returns
    /// [`WindError::NotFound`] without requesting anything from the archive if the place
    /// cannot be geocoded.
    #[builder(start_fn = place)]
    #[doc(hidden)]
    pub async fn build_place(
        &self,
        #[builder(start_fn)] place: &str,
        range: HistoricalRange,
        end_date: Option<NaiveDate>,
    ) -> Result<WindSeries, WindError> {
        let coordinate = self.client.locate(place).await?;
        self.location(coordinate)
            .range(range)
            .maybe_end_date(end_date)
            .call()
            .await
    }
}
