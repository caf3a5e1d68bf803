use crate::types::coordinate::InvalidCoordinate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Place name is empty")]
    EmptyQuery,

    #[error("No match found for '{0}'")]
    NoMatch(String),

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse geocoding response")]
    JsonParse(#[source] reqwest::Error),

    #[error("Match has unparseable coordinates lat='{lat}', lon='{lon}'")]
    UnparseableCoordinate { lat: String, lon: String },

    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),
}
