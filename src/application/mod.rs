// Application layer - Session orchestration and use cases
pub mod monitor_service;
pub mod monitoring_session;
pub mod report_exporter;
pub mod report_sink;
pub mod resampler;
pub mod sample_generator;
