//! Resource snapshots reported by the backend's system monitor

use serde::{Deserialize, Serialize};

/// Overall health label derived server-side from the number of raised alerts.
///
/// Labels the client does not know are kept verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HealthLevel {
    Healthy,
    Warning,
    Critical,
    Unknown(String),
}

impl HealthLevel {
    pub fn as_str(&self) -> &str {
        match self {
            HealthLevel::Healthy => "HEALTHY",
            HealthLevel::Warning => "WARNING",
            HealthLevel::Critical => "CRITICAL",
            HealthLevel::Unknown(label) => label,
        }
    }
}

impl From<String> for HealthLevel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "HEALTHY" => HealthLevel::Healthy,
            "WARNING" => HealthLevel::Warning,
            "CRITICAL" => HealthLevel::Critical,
            _ => HealthLevel::Unknown(label),
        }
    }
}

impl From<HealthLevel> for String {
    fn from(level: HealthLevel) -> Self {
        match level {
            HealthLevel::Unknown(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuStats {
    pub usage_percent: f64,
    /// `null` when the backend cannot determine the core count
    #[serde(default)]
    pub core_count: Option<u32>,
    #[serde(default)]
    pub per_core_usage: Vec<f64>,
    pub alert: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_gb: f64,
    pub used_gb: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_gb: Option<f64>,
    pub percent: f64,
    pub alert: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskStats {
    pub total_gb: f64,
    pub used_gb: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_gb: Option<f64>,
    pub percent: f64,
    pub alert: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub packets_sent: u64,
    pub packets_received: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub pid: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub memory_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProcessList {
    #[serde(default)]
    pub top_processes: Vec<ProcessInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemHealth {
    pub timestamp: String,
    pub overall_health: HealthLevel,
    pub cpu: CpuStats,
    pub memory: MemoryStats,
    pub disk: DiskStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processes: Option<ProcessList>,
}

impl SystemHealth {
    /// Number of resource blocks (cpu, memory, disk) with the alert flag raised
    pub fn alert_count(&self) -> usize {
        [self.cpu.alert, self.memory.alert, self.disk.alert]
            .iter()
            .filter(|a| **a)
            .count()
    }
}
