use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome recorded for a task in the backend's execution history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Success,
    Failed,
    Unknown(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Success => "success",
            TaskStatus::Failed => "failed",
            TaskStatus::Unknown(status) => status,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "success" => TaskStatus::Success,
            "failed" => TaskStatus::Failed,
            _ => TaskStatus::Unknown(status),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Unknown(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub task: String,
    pub status: TaskStatus,
    /// Task-specific payload, e.g. `{"deleted": 3}` for a cleanup
    #[serde(default)]
    pub details: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub status: String,
    /// Total entries held by the backend, not the length of `history`
    pub count: usize,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_page() {
        let page: HistoryPage = serde_json::from_value(serde_json::json!({
            "status": "success",
            "count": 12,
            "history": [
                { "timestamp": "2024-05-01T10:00:00", "task": "cleanup_files", "status": "success", "details": { "deleted": 3 } },
                { "timestamp": "2024-05-01T10:05:00", "task": "backup_files", "status": "failed", "details": {} },
                { "timestamp": "2024-05-01T10:06:00", "task": "cpu_stats", "status": "queued" }
            ]
        }))
        .unwrap();

        assert_eq!(page.count, 12);
        assert_eq!(page.history.len(), 3);
        assert_eq!(page.history[0].details["deleted"], 3);
        assert_eq!(page.history[1].status, TaskStatus::Failed);
        assert_eq!(page.history[2].status, TaskStatus::Unknown("queued".to_string()));
        assert_eq!(serde_json::to_value(&page.history[2].status).unwrap(), "queued");
        assert!(page.history[2].details.is_null());
    }
}
