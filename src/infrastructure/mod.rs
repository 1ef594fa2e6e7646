// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod file_report_sink;
pub mod ticker;
