// Report export use case
use crate::application::report_sink::ReportSink;
use crate::domain::error::MonitorResult;
use crate::domain::metrics::MetricsSnapshot;
use crate::domain::report::{REPORT_LABEL_FORMAT, ReportDocument};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedReport {
    pub file_name: String,
    pub path: PathBuf,
}

#[derive(Clone)]
pub struct ReportExporter {
    sink: Arc<dyn ReportSink>,
}

impl ReportExporter {
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self { sink }
    }

    pub fn label_for<Tz: TimeZone>(at: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        at.format(REPORT_LABEL_FORMAT).to_string()
    }

    pub async fn export(
        &self,
        snapshot: &MetricsSnapshot,
        label: &str,
    ) -> MonitorResult<ExportedReport> {
        let document = ReportDocument::from_snapshot(snapshot, label);
        let file_name = document.file_name();
        let path = self
            .sink
            .write_document(&file_name, &document.render())
            .await?;

        tracing::info!("Exported report {} to {}", file_name, path.display());
        Ok(ExportedReport { file_name, path })
    }
}
