use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "PATIENT-SERVICE";

/// Status reported while the process is serving requests.
pub const STATUS_UP: &str = "UP";

/// Body returned by `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub service: String,
    pub status: String,
}

/// Simple health service used by the REST API.
///
/// The process reports itself as up for as long as it can answer; the store is not probed.
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` naming the service and reporting it as `UP`.
    pub fn check_health() -> HealthRes {
        HealthRes {
            service: SERVICE_NAME.into(),
            status: STATUS_UP.into(),
        }
    }
}
