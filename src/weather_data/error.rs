use thiserror::Error;

/// Failure to obtain a usable response from the forecast or archive endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
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

    // The provider explains rejected requests in a JSON body
    #[error("Weather API rejected request for {url} with status {status}: {reason}")]
    Api {
        url: String,
        status: reqwest::StatusCode,
        reason: String,
    },

    #[error("Failed to read response body from {0}")]
    Body(String, #[source] reqwest::Error),

    #[error("Response from {0} is not valid JSON")]
    JsonParse(String, #[source] serde_json::Error),
}

/// The provider answered with JSON that does not describe a usable wind series.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Payload does not have the expected shape")]
    Shape(#[from] serde_json::Error),

    #[error("Payload is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Hourly arrays differ in length: time={times}, wind_speed_10m={speeds}, wind_direction_10m={directions}")]
    LengthMismatch {
        times: usize,
        speeds: usize,
        directions: usize,
    },

    #[error("Unparseable timestamp '{value}' at index {index}")]
    InvalidTimestamp { index: usize, value: String },

    #[error("Timestamp at index {index} ({value}) is not after the previous one")]
    NonIncreasingTimestamp { index: usize, value: String },

    #[error("Invalid wind speed {value} at index {index}")]
    InvalidSpeed { index: usize, value: f64 },

    #[error("Invalid wind direction {value} at index {index}")]
    InvalidDirection { index: usize, value: f64 },

    #[error("Unexpected wind speed unit '{0}', expected 'm/s'")]
    UnexpectedUnit(String),

    #[error("Payload contains no complete hourly values")]
    Empty,
}
