use crate::geocoding::error::GeocodeError;
use crate::types::coordinate::Coordinate;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

// Nominatim encodes coordinates as strings
#[derive(Debug, Deserialize)]
struct GeocodeMatch {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Resolves free-text place names to coordinates through a Nominatim-compatible search
/// endpoint.
///
/// The service's usage policy requires each application to identify itself, so every
/// request carries the configured `User-Agent`.
#[derive(Debug, Clone)]
pub struct Geocoder {
    search_url: String,
    client: Client,
}

impl Geocoder {
    pub fn new(
        search_url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, GeocodeError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            search_url: search_url.to_string(),
            client: builder.build().map_err(GeocodeError::ClientBuild)?,
        })
    }

    /// Looks up `place` and returns the coordinate of the best match.
    ///
    /// Only one match is requested. There is no retry: a failed lookup is final.
    /// The name is sent as given; only a blank name is rejected up front.
    pub async fn resolve(&self, place: &str) -> Result<Coordinate, GeocodeError> {
        if place.trim().is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }
        info!("Geocoding '{}'", place);

        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| GeocodeError::NetworkRequest(self.search_url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", self.search_url, e);
                return Err(if let Some(status) = e.status() {
                    GeocodeError::HttpStatus {
                        url: self.search_url.clone(),
                        status,
                        source: e,
                    }
                } else {
                    GeocodeError::NetworkRequest(self.search_url.clone(), e)
                });
            }
        };

        let matches: Vec<GeocodeMatch> = response.json().await.map_err(GeocodeError::JsonParse)?;
        let best = matches
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NoMatch(place.to_string()))?;

        let (Ok(lat), Ok(lon)) = (best.lat.trim().parse::<f64>(), best.lon.trim().parse::<f64>())
        else {
            return Err(GeocodeError::UnparseableCoordinate {
                lat: best.lat,
                lon: best.lon,
            });
        };
        let coordinate = Coordinate::new(lat, lon)?;

        debug!(
            "Resolved '{}' to ({}, {}) [{}]",
            place,
            lat,
            lon,
            best.display_name.as_deref().unwrap_or("unnamed")
        );
        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockProvider;

    #[tokio::test]
    async fn test_resolves_first_match() -> Result<(), GeocodeError> {
        let mock = MockProvider::start().await;
        let geocoder = Geocoder::new(&mock.search_url(), "WindDashboardTest/1.0", None)?;

        let coordinate = geocoder.resolve("Chennai, India").await?;
        assert_eq!(coordinate, Coordinate::new(13.0836939, 80.270186).unwrap());

        let request = mock.last_search().expect("a search request was recorded");
        assert_eq!(request.query.get("q").map(String::as_str), Some("Chennai, India"));
        assert_eq!(request.query.get("format").map(String::as_str), Some("json"));
        assert_eq!(request.query.get("limit").map(String::as_str), Some("1"));
        assert_eq!(request.user_agent.as_deref(), Some("WindDashboardTest/1.0"));
        Ok(())
    }

    #[tokio::test]
    async fn test_no_match() {
        let mock = MockProvider::start().await;
        let geocoder = Geocoder::new(&mock.search_url(), "test", None).unwrap();

        let result = geocoder.resolve("Atlantis").await;
        assert!(matches!(result, Err(GeocodeError::NoMatch(ref q)) if q == "Atlantis"));
    }

    #[tokio::test]
    async fn test_sends_place_name_as_entered() {
        let mock = MockProvider::start().await;
        let geocoder = Geocoder::new(&mock.search_url(), "test", None).unwrap();

        let result = geocoder.resolve("  Chennai, India ").await;
        let request = mock.last_search().unwrap();
        assert_eq!(
            request.query.get("q").map(String::as_str),
            Some("  Chennai, India ")
        );
        assert!(matches!(result, Err(GeocodeError::NoMatch(ref q)) if q == "  Chennai, India "));
    }

    #[tokio::test]
    async fn test_empty_query_sends_nothing() {
        let mock = MockProvider::start().await;
        let geocoder = Geocoder::new(&mock.search_url(), "test", None).unwrap();

        assert!(matches!(
            geocoder.resolve("   ").await,
            Err(GeocodeError::EmptyQuery)
        ));
        assert_eq!(mock.search_hits(), 0);
    }

    #[tokio::test]
    async fn test_unparseable_and_out_of_range_matches() {
        let mock = MockProvider::start().await;
        let geocoder = Geocoder::new(&mock.search_url(), "test", None).unwrap();

        assert!(matches!(
            geocoder.resolve("Garbled").await,
            Err(GeocodeError::UnparseableCoordinate { .. })
        ));
        assert!(matches!(
            geocoder.resolve("Offworld").await,
            Err(GeocodeError::InvalidCoordinate(_))
        ));
    }

    #[tokio::test]
    async fn test_server_error() {
        let mock = MockProvider::start().await;
        let geocoder = Geocoder::new(&mock.search_url(), "test", None).unwrap();

        let result = geocoder.resolve("Boom").await;
        assert!(matches!(
            result,
            Err(GeocodeError::HttpStatus { status, .. }) if status.as_u16() == 503
        ));
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        // Nothing listens on port 9 (discard) on a test machine
        let geocoder = Geocoder::new("http://127.0.0.1:9/search", "test", None).unwrap();
        assert!(matches!(
            geocoder.resolve("Chennai").await,
            Err(GeocodeError::NetworkRequest(..))
        ));
    }

    #[tokio::test]
    #[ignore = "hits the public Nominatim service"]
    async fn test_live_nominatim() -> Result<(), GeocodeError> {
        let geocoder = Geocoder::new(
            crate::wind_data::DEFAULT_GEOCODING_URL,
            crate::wind_data::DEFAULT_USER_AGENT,
            None,
        )?;
        let coordinate = geocoder.resolve("Chennai, India").await?;
        assert!((coordinate.latitude() - 13.08).abs() < 0.5);
        assert!((coordinate.longitude() - 80.27).abs() < 0.5);
        Ok(())
    }
}
