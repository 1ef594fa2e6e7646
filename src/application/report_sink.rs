// Sink trait for exported report documents
use crate::domain::error::MonitorResult;
use async_trait::async_trait;
use std::path::PathBuf;

#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Store a rendered document under `file_name` and return where it landed.
    /// Failures are reported as `MonitorError::ExportFailed`.
    async fn write_document(&self, file_name: &str, contents: &str) -> MonitorResult<PathBuf>;
}
