use crate::api::SharedStatusProvider;
use crate::api::responses::TemperatureReading;
use crate::location;
use crate::status::StatusProvider;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use rand::Rng;
use serde::Deserialize;
use std::time::SystemTime;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const CELSIUS_UNIT: &str = "°C";
const SENSOR_TYPE: &str = "Sensor";
const SENSOR_DESCRIPTION: &str = "Description";
const MIN_TEMPERATURE: i64 = 18;
const MAX_TEMPERATURE: i64 = 29;

#[derive(Debug, Deserialize)]
pub struct TemperatureQuery {
    pub location: Option<String>,
}

pub async fn get_temperature_by_location(
    State(provider): State<SharedStatusProvider>,
    Query(query): Query<TemperatureQuery>,
) -> impl IntoResponse {
    let resolved = location::resolve_query_location(query.location.as_deref());
    Json(build_reading(
        &resolved,
        0,
        provider.as_ref(),
        SystemTime::now(),
    ))
}

pub async fn get_temperature_by_sensor(
    State(provider): State<SharedStatusProvider>,
    Path(sensor_id): Path<i64>,
) -> impl IntoResponse {
    // Empty location fails the known-location check and forces the
    // sensor-id fallback inside build_reading.
    Json(build_reading(
        "",
        sensor_id,
        provider.as_ref(),
        SystemTime::now(),
    ))
}

pub async fn get_health() -> &'static str {
    "Healthy"
}

/// Assemble a reading for a raw location string, falling back to the
/// sensor-id table when the string is not a known location. The derived
/// sensor id always agrees with the resolved location.
fn build_reading(
    raw_location: &str,
    sensor_id: i64,
    provider: &dyn StatusProvider,
    now: SystemTime,
) -> TemperatureReading {
    let value = rand::rng().random_range(MIN_TEMPERATURE..MAX_TEMPERATURE) as f64;
    let resolved = if location::is_known_location(raw_location) {
        location::title_case(raw_location)
    } else {
        location::location_for_sensor(sensor_id).to_string()
    };
    let derived_sensor_id = location::sensor_id_for_location(&resolved);

    TemperatureReading {
        value,
        unit: CELSIUS_UNIT.to_string(),
        timestamp: format_timestamp(now),
        location: resolved,
        status: provider.sample(),
        sensor_id: derived_sensor_id.to_string(),
        sensor_type: SENSOR_TYPE.to_string(),
        description: SENSOR_DESCRIPTION.to_string(),
    }
}

fn format_timestamp(timestamp: SystemTime) -> String {
    OffsetDateTime::from(timestamp)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
