use crate::types::coordinate::Coordinate;
use crate::types::wind_series::{TimePoint, WindSeries};
use crate::weather_data::error::PayloadError;
use crate::weather_data::payload::ProviderPayload;
use chrono::NaiveDateTime;
use log::{debug, warn};

const TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];
const SPEED_UNIT: &str = "m/s";

/// Zips the three parallel hourly arrays of a provider payload into a [`WindSeries`].
///
/// The provider's order is kept as is. Rows where speed or direction is `null` are
/// skipped; every other irregularity is an error.
///
/// # Errors
///
/// * [`PayloadError::MissingField`] if the hourly block or one of its arrays is absent.
/// * [`PayloadError::LengthMismatch`] if the arrays differ in length.
/// * [`PayloadError::InvalidTimestamp`] / [`PayloadError::NonIncreasingTimestamp`] for
///   unparseable or out-of-order timestamps.
/// * [`PayloadError::InvalidSpeed`] / [`PayloadError::InvalidDirection`] for negative,
///   non-finite or out-of-range values.
/// * [`PayloadError::UnexpectedUnit`] if the payload reports speeds in another unit.
/// * [`PayloadError::Empty`] if no complete row remains.
///
/// # Examples
///
/// ```rust
/// use windscope::{normalize, ProviderPayload};
///
/// let payload = ProviderPayload::from_arrays(
///     vec!["2025-06-01T00:00".into(), "2025-06-01T01:00".into()],
///     vec![Some(3.2), Some(4.1)],
///     vec![Some(200.0), Some(360.0)],
/// );
/// let series = normalize(payload).unwrap();
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.last().unwrap().wind_direction_deg, 0.0);
/// ```
pub fn normalize(payload: ProviderPayload) -> Result<WindSeries, PayloadError> {
    if let Some(unit) = payload
        .hourly_units
        .as_ref()
        .and_then(|units| units.wind_speed_10m.as_deref())
    {
        if unit != SPEED_UNIT {
            return Err(PayloadError::UnexpectedUnit(unit.to_string()));
        }
    }

    let hourly = payload
        .hourly
        .ok_or(PayloadError::MissingField("hourly"))?;
    let times = hourly
        .time
        .ok_or(PayloadError::MissingField("hourly.time"))?;
    let speeds = hourly
        .wind_speed_10m
        .ok_or(PayloadError::MissingField("hourly.wind_speed_10m"))?;
    let directions = hourly
        .wind_direction_10m
        .ok_or(PayloadError::MissingField("hourly.wind_direction_10m"))?;

    if times.len() != speeds.len() || times.len() != directions.len() {
        return Err(PayloadError::LengthMismatch {
            times: times.len(),
            speeds: speeds.len(),
            directions: directions.len(),
        });
    }

    let mut points = Vec::with_capacity(times.len());
    let mut previous: Option<NaiveDateTime> = None;
    let mut skipped = 0usize;

    for (index, ((time, speed), direction)) in times
        .iter()
        .zip(speeds.iter())
        .zip(directions.iter())
        .enumerate()
    {
        let timestamp = parse_timestamp(time).ok_or_else(|| PayloadError::InvalidTimestamp {
            index,
            value: time.clone(),
        })?;
        // Ordering is checked on every row, including the ones skipped below
        if previous.is_some_and(|prev| timestamp <= prev) {
            return Err(PayloadError::NonIncreasingTimestamp {
                index,
                value: time.clone(),
            });
        }
        previous = Some(timestamp);

        let (Some(speed), Some(direction)) = (*speed, *direction) else {
            skipped += 1;
            continue;
        };
        if !speed.is_finite() || speed < 0.0 {
            return Err(PayloadError::InvalidSpeed {
                index,
                value: speed,
            });
        }
        if !direction.is_finite() || !(0.0..=360.0).contains(&direction) {
            return Err(PayloadError::InvalidDirection {
                index,
                value: direction,
            });
        }

        points.push(TimePoint {
            timestamp,
            wind_speed_mps: speed,
            wind_direction_deg: direction % 360.0,
        });
    }

    if skipped > 0 {
        warn!(
            "Skipped {} of {} hourly rows with missing wind values",
            skipped,
            times.len()
        );
    }
    if points.is_empty() {
        return Err(PayloadError::Empty);
    }
    debug!("Normalized {} hourly wind points", points.len());

    let grid_location = match (payload.latitude, payload.longitude) {
        (Some(lat), Some(lon)) => Coordinate::new(lat, lon).ok(),
        _ => None,
    };

    Ok(WindSeries {
        points,
        grid_location,
        timezone: payload.timezone,
        utc_offset_seconds: payload.utc_offset_seconds.unwrap_or(0),
    })
}

/// Deserializes a raw provider response and normalizes it.
pub(crate) fn normalize_value(value: serde_json::Value) -> Result<WindSeries, PayloadError> {
    let payload: ProviderPayload = serde_json::from_value(value)?;
    normalize(payload)
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
