//! Local stand-in for the geocoding, forecast and archive services, used by tests.
//!
//! Geocoding answers from a small table of known places. Some places resolve to
//! latitudes that make the weather endpoints misbehave, see [`faulty_response`].

use crate::wind_data::WindDataConfig;
use axum::extract::{Query, State};
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub query: HashMap<String, String>,
    pub user_agent: Option<String>,
}

#[derive(Default)]
struct MockState {
    searches: Mutex<Vec<RecordedRequest>>,
    forecasts: Mutex<Vec<RecordedRequest>>,
    archives: Mutex<Vec<RecordedRequest>>,
}

pub(crate) struct MockProvider {
    base_url: String,
    state: Arc<MockState>,
}

impl MockProvider {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/search", get(search))
            .route("/v1/forecast", get(forecast))
            .route("/v1/archive", get(archive))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    pub fn forecast_url(&self) -> String {
        format!("{}/v1/forecast", self.base_url)
    }

    pub fn archive_url(&self) -> String {
        format!("{}/v1/archive", self.base_url)
    }

    pub fn config(&self) -> WindDataConfig {
        WindDataConfig::builder()
            .geocoding_url(self.search_url())
            .forecast_url(self.forecast_url())
            .archive_url(self.archive_url())
            .user_agent("WindDashboardTest/1.0")
            .build()
    }

    pub fn search_hits(&self) -> usize {
        self.state.searches.lock().unwrap().len()
    }

    pub fn forecast_hits(&self) -> usize {
        self.state.forecasts.lock().unwrap().len()
    }

    pub fn archive_hits(&self) -> usize {
        self.state.archives.lock().unwrap().len()
    }

    pub fn last_search(&self) -> Option<RecordedRequest> {
        self.state.searches.lock().unwrap().last().cloned()
    }

    pub fn last_forecast(&self) -> Option<RecordedRequest> {
        self.state.forecasts.lock().unwrap().last().cloned()
    }

    pub fn last_archive(&self) -> Option<RecordedRequest> {
        self.state.archives.lock().unwrap().last().cloned()
    }
}

fn record(log: &Mutex<Vec<RecordedRequest>>, query: HashMap<String, String>, headers: &HeaderMap) {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    log.lock()
        .unwrap()
        .push(RecordedRequest { query, user_agent });
}

async fn search(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let place = query.get("q").cloned().unwrap_or_default();
    record(&state.searches, query, &headers);

    let (lat, lon) = match place.as_str() {
        "Chennai, India" | "Chennai" => ("13.0836939", "80.270186"),
        "Rejected Town" => ("1.5", "1.5"),
        "Garbage Town" => ("2.5", "2.5"),
        "Crooked Town" => ("3.5", "3.5"),
        "Broken Town" => ("4.5", "4.5"),
        "Garbled" => ("north", "80.0"),
        "Offworld" => ("123.0", "80.0"),
        "Boom" => return StatusCode::SERVICE_UNAVAILABLE.into_response(),
        _ => return Json(json!([])).into_response(),
    };
    Json(json!([{ "lat": lat, "lon": lon, "display_name": place }])).into_response()
}

async fn forecast(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let latitude = query.get("latitude").cloned().unwrap_or_default();
    let days: i64 = query
        .get("forecast_days")
        .and_then(|d| d.parse().ok())
        .unwrap_or(1);
    record(&state.forecasts, query, &headers);

    if let Some(response) = faulty_response(&latitude) {
        return response;
    }
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    Json(hourly_payload(start, days * 24, 0)).into_response()
}

async fn archive(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let latitude = query.get("latitude").cloned().unwrap_or_default();
    let dates = (
        query.get("start_date").and_then(|d| d.parse::<NaiveDate>().ok()),
        query.get("end_date").and_then(|d| d.parse::<NaiveDate>().ok()),
    );
    record(&state.archives, query, &headers);

    if let Some(response) = faulty_response(&latitude) {
        return response;
    }
    let (Some(start), Some(end)) = dates else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": true, "reason": "Parameter 'start_date' or 'end_date' is missing"})),
        )
            .into_response();
    };
    let hours = ((end - start).num_days() + 1) * 24;
    // Like the real archive, the most recent day has not been ingested yet
    Json(hourly_payload(start, hours, 24)).into_response()
}

/// Misbehaving answers keyed by the requested latitude.
fn faulty_response(latitude: &str) -> Option<Response> {
    let response = match latitude {
        "1.5" => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": true, "reason": "Latitude must be in range of -90 to 90°."})),
        )
            .into_response(),
        "2.5" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        "3.5" => Json(json!({
            "latitude": 3.5,
            "longitude": 3.5,
            "hourly": {
                "time": ["2025-06-01T00:00", "2025-06-01T01:00"],
                "wind_speed_10m": [1.0],
                "wind_direction_10m": [90.0, 100.0]
            }
        }))
        .into_response(),
        "4.5" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        _ => return None,
    };
    Some(response)
}

/// An Open-Meteo style payload of `hours` hourly values from midnight of `start`, with the
/// last `trailing_nulls` values reported as null.
fn hourly_payload(start: NaiveDate, hours: i64, trailing_nulls: i64) -> Value {
    let midnight = start.and_hms_opt(0, 0, 0).unwrap();
    let mut time = Vec::new();
    let mut speed = Vec::new();
    let mut direction = Vec::new();
    for i in 0..hours {
        time.push((midnight + Duration::hours(i)).format("%Y-%m-%dT%H:%M").to_string());
        if i >= hours - trailing_nulls {
            speed.push(Value::Null);
            direction.push(Value::Null);
        } else {
            speed.push(json!(1.0 + (i % 10) as f64 * 0.5));
            direction.push(json!((i * 15) % 360));
        }
    }
    json!({
        "latitude": 13.125,
        "longitude": 80.25,
        "generationtime_ms": 0.05,
        "utc_offset_seconds": 19800,
        "timezone": "Asia/Kolkata",
        "timezone_abbreviation": "GMT+5:30",
        "elevation": 7.0,
        "hourly_units": {"time": "iso8601", "wind_speed_10m": "m/s", "wind_direction_10m": "°"},
        "hourly": {
            "time": time,
            "wind_speed_10m": speed,
            "wind_direction_10m": direction
        }
    })
}
