use rand::Rng;
use serde::Serialize;

pub mod mock;

/// Health states a sensor can report with a reading.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

pub const STATUSES: [HealthStatus; 2] = [HealthStatus::Healthy, HealthStatus::Unhealthy];

/// Source of per-reading sensor health. The production implementation is a
/// stub until real telemetry is wired in; swapping it out only touches the
/// router construction.
pub trait StatusProvider {
    fn sample(&self) -> HealthStatus;
}

/// Draws uniformly from [`STATUSES`]. Uses the thread-local RNG, so
/// concurrent handlers never share generator state.
pub struct RandomStatusProvider;

impl StatusProvider for RandomStatusProvider {
    fn sample(&self) -> HealthStatus {
        let mut rng = rand::rng();
        STATUSES[rng.random_range(0..STATUSES.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_provider_samples_from_status_set() {
        let provider = RandomStatusProvider;
        for _ in 0..32 {
            assert!(STATUSES.contains(&provider.sample()));
        }
    }

    #[test]
    fn health_status_serializes_to_exact_literals() {
        let healthy = serde_json::to_value(HealthStatus::Healthy).expect("serialize status");
        let unhealthy = serde_json::to_value(HealthStatus::Unhealthy).expect("serialize status");

        assert_eq!(healthy, serde_json::json!("Healthy"));
        assert_eq!(unhealthy, serde_json::json!("Unhealthy"));
    }
}
