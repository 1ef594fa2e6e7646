// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::monitor_service::MonitorService;
use crate::application::monitoring_session::MonitoringSession;
use crate::application::report_exporter::ReportExporter;
use crate::application::sample_generator::SampleGenerator;
use crate::infrastructure::config::load_monitor_config;
use crate::infrastructure::file_report_sink::FileReportSink;
use crate::infrastructure::ticker::spawn_ticker;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vitals_monitor=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = load_monitor_config()?;
    let time_range = config.time_range()?;
    let theme = config.theme()?;

    let generator = match config.session.rng_seed {
        Some(seed) => {
            tracing::info!("Using seeded sample generator ({})", seed);
            SampleGenerator::seeded(seed)
        }
        None => SampleGenerator::from_entropy(),
    };

    // Create the session and services (application layer)
    let session = MonitoringSession::new(chrono::Utc::now(), generator)
        .with_preferences(time_range, theme);
    let sink = Arc::new(FileReportSink::new(config.reports.output_dir.clone()));
    let monitor_service = MonitorService::new(session, ReportExporter::new(sink))?;

    let _ticker = spawn_ticker(monitor_service.clone(), config.tick_interval());

    // Build router (presentation layer)
    let state = Arc::new(AppState { monitor_service });
    let app = router(state);

    // Start server
    let addr = config.bind_address()?;
    tracing::info!("Starting vitals-monitor service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
