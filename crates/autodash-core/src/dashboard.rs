use serde::{Deserialize, Serialize};

use crate::HealthLevel;

/// Liveness answer from `/api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub api_status: String,
    pub dashboard_connected: bool,
    #[serde(default)]
    pub scripts_available: Vec<String>,
    pub timestamp: String,
}

/// Aggregate counters and resource usage for the overview screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_tasks: u64,
    pub successful_tasks: u64,
    pub failed_tasks: u64,
    pub system_health: HealthLevel,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
    pub timestamp: String,
}

impl DashboardSummary {
    /// Percentage of recorded tasks that succeeded, `None` before any task ran
    pub fn success_rate(&self) -> Option<f64> {
        if self.total_tasks == 0 {
            return None;
        }
        Some(self.successful_tasks as f64 / self.total_tasks as f64 * 100.0)
    }
}

/// Generic `{status, message}` acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total: u64, ok: u64) -> DashboardSummary {
        DashboardSummary {
            total_tasks: total,
            successful_tasks: ok,
            failed_tasks: total - ok,
            system_health: HealthLevel::Healthy,
            cpu_usage: 10.0,
            memory_usage: 20.0,
            disk_usage: 30.0,
            timestamp: "2024-05-01T12:00:00".to_string(),
        }
    }

    #[test]
    fn test_success_rate() {
        assert_eq!(summary(0, 0).success_rate(), None);
        assert_eq!(summary(4, 3).success_rate(), Some(75.0));
    }

    #[test]
    fn test_summary_from_backend() {
        let parsed: DashboardSummary = serde_json::from_value(serde_json::json!({
            "total_tasks": 5,
            "successful_tasks": 4,
            "failed_tasks": 1,
            "system_health": "CRITICAL",
            "cpu_usage": 88.2,
            "memory_usage": 91.0,
            "disk_usage": 40.5,
            "timestamp": "2024-05-01T12:00:00"
        }))
        .unwrap();
        assert_eq!(parsed.system_health, HealthLevel::Critical);
        assert_eq!(parsed.failed_tasks, 1);
    }
}
