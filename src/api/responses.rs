use crate::status::HealthStatus;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureReading {
    pub value: f64,
    pub unit: String,
    pub timestamp: String,
    pub location: String,
    pub status: HealthStatus,
    pub sensor_id: String,
    pub sensor_type: String,
    pub description: String,
}
