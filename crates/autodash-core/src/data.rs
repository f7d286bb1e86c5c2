//! Upload, analysis and processing of tabular data files

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Statistics computed by the backend after loading and cleaning a file.
///
/// The backend answers `{}` when nothing could be loaded, so every field
/// falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DataStatistics {
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub total_columns: u64,
    #[serde(default)]
    pub memory_usage: String,
    /// Column name to describe() output (count, mean, std, ...)
    #[serde(default)]
    pub numeric_summary: BTreeMap<String, Value>,
    #[serde(default)]
    pub data_types: BTreeMap<String, Value>,
}

impl DataStatistics {
    pub fn is_empty(&self) -> bool {
        self.total_rows == 0 && self.total_columns == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub status: String,
    pub filename: String,
    #[serde(default)]
    pub statistics: DataStatistics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub filepath: String,
    pub output_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub status: String,
    pub output_file: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_request_uses_backend_names() {
        let req = ProcessRequest {
            filepath: "uploads/sales.csv".to_string(),
            output_path: "out/sales_clean.csv".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "filepath": "uploads/sales.csv", "output_path": "out/sales_clean.csv" })
        );
    }

    #[test]
    fn test_empty_statistics() {
        let stats: DataStatistics = serde_json::from_str("{}").unwrap();
        assert!(stats.is_empty());
        assert!(stats.numeric_summary.is_empty());
    }
}
