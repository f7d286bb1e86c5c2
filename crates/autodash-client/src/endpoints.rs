use std::path::Path;

use autodash_core::{
    ApiStatus, BackupRequest, CleanupRequest, CleanupResult, CpuStats, DashboardError,
    DashboardSummary, DataStatistics, DirectorySize, DiskStats, FileListing, HealthCheck,
    HistoryPage, MemoryStats, NetworkStats, OperationStatus, OrganizeRequest, ProcessList,
    ProcessRequest, ProcessResult, Result, SystemHealth, UploadResult,
};
use reqwest::multipart::{Form, Part};
use tracing::{info, instrument};

use crate::client::ApiClient;
use crate::request::Query;

/// Multipart field the backend reads the uploaded file from
const UPLOAD_FIELD: &str = "file";

// =============================================================================
// Health & Status
// =============================================================================

impl ApiClient {
    pub async fn health(&self) -> Result<HealthCheck> {
        self.get("/api/health").await
    }

    pub async fn status(&self) -> Result<ApiStatus> {
        self.get("/api/status").await
    }
}

// =============================================================================
// System Monitoring
// =============================================================================

impl ApiClient {
    pub async fn system_health(&self) -> Result<SystemHealth> {
        self.get("/api/system/health").await
    }

    pub async fn cpu_stats(&self) -> Result<CpuStats> {
        self.get("/api/system/cpu").await
    }

    pub async fn memory_stats(&self) -> Result<MemoryStats> {
        self.get("/api/system/memory").await
    }

    /// Disk usage for the filesystem holding `path` (backend default `/`)
    pub async fn disk_stats(&self, path: Option<&str>) -> Result<DiskStats> {
        let query = Query::new().param("path", path);
        self.get(&query.apply("/api/system/disk")).await
    }

    pub async fn network_stats(&self) -> Result<NetworkStats> {
        self.get("/api/system/network").await
    }

    /// Top processes by memory usage (backend default 5)
    pub async fn processes(&self, top_n: Option<u32>) -> Result<ProcessList> {
        let query = Query::new().param("top_n", top_n);
        self.get(&query.apply("/api/system/processes")).await
    }
}

// =============================================================================
// Data Processing
// =============================================================================

impl ApiClient {
    /// Upload file contents as multipart form data under the `file` field
    #[instrument(skip(self, contents), fields(size = contents.len()))]
    pub async fn upload_data(&self, file_name: &str, contents: Vec<u8>) -> Result<UploadResult> {
        let part = Part::bytes(contents).file_name(file_name.to_string());
        let form = Form::new().part(UPLOAD_FIELD, part);

        let result: UploadResult = self.post_multipart("/api/data/upload", form).await?;
        info!(
            rows = result.statistics.total_rows,
            columns = result.statistics.total_columns,
            "Uploaded {}",
            result.filename
        );
        Ok(result)
    }

    /// Read a file from disk and upload it under its own file name
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<UploadResult> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                DashboardError::InvalidRequest(format!("no file name in {}", path.display()))
            })?;

        let contents = tokio::fs::read(path).await?;
        self.upload_data(file_name, contents).await
    }

    /// Analyze a previously uploaded file by name
    pub async fn analyze_file(&self, filename: &str) -> Result<DataStatistics> {
        let path = format!("/api/data/analyze/{}", urlencoding::encode(filename));
        self.get(&path).await
    }

    pub async fn process_data(&self, filepath: &str, output_path: &str) -> Result<ProcessResult> {
        let request = ProcessRequest {
            filepath: filepath.to_string(),
            output_path: output_path.to_string(),
        };
        self.post_json("/api/data/process", &request).await
    }
}

// =============================================================================
// File Management
// =============================================================================

impl ApiClient {
    pub async fn list_files(
        &self,
        directory: Option<&str>,
        recursive: Option<bool>,
    ) -> Result<FileListing> {
        let query = Query::new()
            .param("directory", directory)
            .param("recursive", recursive);
        self.get(&query.apply("/api/files/list")).await
    }

    pub async fn directory_size(&self, directory: Option<&str>) -> Result<DirectorySize> {
        let query = Query::new().param("directory", directory);
        self.get(&query.apply("/api/files/size")).await
    }

    /// Delete files older than `days`, optionally only those with the given suffixes
    #[instrument(skip(self))]
    pub async fn cleanup_files(
        &self,
        directory: &str,
        days: u32,
        extensions: Option<Vec<String>>,
    ) -> Result<CleanupResult> {
        let request = CleanupRequest {
            directory: directory.to_string(),
            days,
            extensions,
        };
        let result: CleanupResult = self.post_json("/api/files/cleanup", &request).await?;
        info!(deleted = result.deleted_count, "Cleanup finished");
        Ok(result)
    }

    pub async fn organize_files(&self, directory: &str) -> Result<OperationStatus> {
        let request = OrganizeRequest {
            directory: directory.to_string(),
        };
        self.post_json("/api/files/organize", &request).await
    }

    pub async fn backup_files(&self, source: &str, destination: &str) -> Result<OperationStatus> {
        let request = BackupRequest {
            source: source.to_string(),
            destination: destination.to_string(),
        };
        self.post_json("/api/files/backup", &request).await
    }
}

// =============================================================================
// History & Dashboard
// =============================================================================

impl ApiClient {
    /// Most recent history entries (backend default 50)
    pub async fn history(&self, limit: Option<u32>) -> Result<HistoryPage> {
        let query = Query::new().param("limit", limit);
        self.get(&query.apply("/api/history")).await
    }

    pub async fn clear_history(&self) -> Result<OperationStatus> {
        self.post_empty("/api/history/clear").await
    }

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        self.get("/api/dashboard/summary").await
    }
}
