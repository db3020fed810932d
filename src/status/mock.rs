use crate::status::{HealthStatus, StatusProvider};

/// Always reports the configured status. Lets tests pin down the one
/// randomized field that is not a numeric range.
pub struct FixedStatusProvider {
    status: HealthStatus,
}

impl FixedStatusProvider {
    pub fn new(status: HealthStatus) -> Self {
        Self { status }
    }
}

impl StatusProvider for FixedStatusProvider {
    fn sample(&self) -> HealthStatus {
        self.status
    }
}
