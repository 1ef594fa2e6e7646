// Report sink writing documents to a local directory
use crate::application::report_sink::ReportSink;
use crate::domain::error::{MonitorError, MonitorResult};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileReportSink {
    output_dir: PathBuf,
}

impl FileReportSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl ReportSink for FileReportSink {
    async fn write_document(&self, file_name: &str, contents: &str) -> MonitorResult<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| MonitorError::ExportFailed {
                location: self.output_dir.clone(),
                source,
            })?;

        let path = self.output_dir.join(file_name);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|source| MonitorError::ExportFailed {
                location: path.clone(),
                source,
            })?;

        Ok(path)
    }
}
