use crate::export::ExportError;
use crate::geocoding::error::GeocodeError;
use crate::types::coordinate::InvalidCoordinate;
use crate::types::summary::SummaryError;
use crate::weather_data::error::{FetchError, PayloadError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindError {
    // Every geocoding failure, whatever the cause, means the place could not be located
    #[error("Place '{place}' not found")]
    NotFound {
        place: String,
        #[source]
        source: GeocodeError,
    },

    #[error("Failed to initialize geocoding client")]
    GeocoderInit(#[source] GeocodeError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Malformed weather payload")]
    MalformedPayload(#[from] PayloadError),

    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Forecast days must be between 1 and 5, got {0}")]
    InvalidForecastDays(u8),

    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),
}

impl WindError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, WindError::NotFound { .. })
    }
}
