use crate::status::StatusProvider;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

pub mod handlers;
pub mod responses;

pub type SharedStatusProvider = Arc<dyn StatusProvider + Send + Sync>;

pub fn router(provider: SharedStatusProvider) -> Router {
    Router::new()
        .route("/temperature", get(handlers::get_temperature_by_location))
        .route(
            "/temperature/{sensor_id}",
            get(handlers::get_temperature_by_sensor),
        )
        .route("/health", get(handlers::get_health))
        .with_state(provider)
}
