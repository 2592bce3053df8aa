//! Backend connectivity indicator
//! Best-effort and advisory: it never gates submission or alerts.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use maternal_guide_data::PredictionApi;

/// Connectivity with the prediction backend as last observed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// No health check has completed yet
    #[default]
    Checking,
    /// Backend answered the health check
    Connected { status: String },
    /// Health check failed
    Disconnected { error: String },
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected { .. })
    }

    /// One-line summary for a status badge
    pub fn summary(&self) -> String {
        match self {
            ConnectionStatus::Checking => "Testing connection...".to_string(),
            ConnectionStatus::Connected { status } => format!("Backend connected - {}", status),
            ConnectionStatus::Disconnected { error } => format!("Backend disconnected: {}", error),
        }
    }
}

/// Issue one health check and report the outcome
pub async fn check_connection(api: &dyn PredictionApi) -> ConnectionStatus {
    match api.health_check().await {
        Ok(health) => {
            info!("Prediction backend reachable: {}", health.status);
            ConnectionStatus::Connected { status: health.status }
        }
        Err(e) => {
            warn!("Prediction backend unreachable: {}", e);
            ConnectionStatus::Disconnected { error: e.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockPredictionApi;
    use maternal_guide_data::ApiError;

    #[test]
    fn test_check_connection_connected() {
        let api = MockPredictionApi::new().with_health_status("ok");
        let status = tokio_test::block_on(check_connection(&api));
        assert_eq!(status, ConnectionStatus::Connected { status: "ok".to_string() });
        assert_eq!(status.summary(), "Backend connected - ok");
        assert_eq!(api.health_call_count(), 1);
    }

    #[tokio::test]
    async fn test_check_connection_disconnected() {
        let api = MockPredictionApi::new()
            .with_health_failure(ApiError::Transport("connection refused".to_string()));
        let status = check_connection(&api).await;
        assert!(!status.is_connected());
        assert_eq!(
            status,
            ConnectionStatus::Disconnected {
                error: "Transport error: connection refused".to_string()
            }
        );
    }

    #[test]
    fn test_status_serializes_with_tag() {
        let value = serde_json::to_value(ConnectionStatus::Checking).unwrap();
        assert_eq!(value, serde_json::json!({ "state": "checking" }));
    }
}
