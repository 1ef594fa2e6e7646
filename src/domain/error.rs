// Error types shared by the monitoring core
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    /// The series store has no samples. Seeding at construction makes this unreachable.
    #[error("series store is empty")]
    EmptyStore,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to export report to {location}: {source}")]
    ExportFailed {
        location: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type MonitorResult<T> = Result<T, MonitorError>;
