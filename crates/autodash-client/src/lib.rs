pub mod client;
mod endpoints;
pub mod request;

pub use client::ApiClient;
pub use request::{ContentType, Query, RequestBody};

// Re-export core types so callers only need this crate
pub use autodash_core::{
    ApiStatus, ClientConfig, CpuStats, DashboardError, DashboardSummary, DataStatistics,
    DirectorySize, DiskStats, FileEntry, FileListing, HealthCheck, HealthLevel, HistoryEntry,
    HistoryPage, MemoryStats, NetworkStats, OperationStatus, ProcessInfo, ProcessList,
    ProcessResult, Result, SystemHealth, TaskStatus, UploadResult,
};
