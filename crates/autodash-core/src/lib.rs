// Domain modules
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod files;
pub mod history;
pub mod system;

pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use dashboard::{ApiStatus, DashboardSummary, HealthCheck, OperationStatus};
pub use data::{DataStatistics, ProcessRequest, ProcessResult, UploadResult};
pub use error::{DashboardError, Result};
pub use files::{
    BackupRequest, CleanupRequest, CleanupResult, DirectorySize, FileEntry, FileListing,
    OrganizeRequest,
};
pub use history::{HistoryEntry, HistoryPage, TaskStatus};
pub use system::{
    CpuStats, DiskStats, HealthLevel, MemoryStats, NetworkStats, ProcessInfo, ProcessList,
    SystemHealth,
};
