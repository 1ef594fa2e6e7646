// Monitor service - Async facade over the monitoring session
//
// Ticks, commands and queries all serialize on one mutex, and the lock is only
// held for synchronous work. After every tick or command an immutable
// dashboard view is published on a watch channel for streaming readers.
use crate::application::monitoring_session::{DashboardView, MonitoringSession};
use crate::application::report_exporter::{ExportedReport, ReportExporter};
use crate::application::resampler::HistoricalView;
use crate::domain::error::MonitorResult;
use crate::domain::granularity::Granularity;
use crate::domain::metrics::MetricsSnapshot;
use crate::domain::sample::Sample;
use crate::domain::session::SessionState;
use crate::domain::theme::{Theme, ThemeStyle};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub state: SessionState,
    pub tick_count: u64,
    pub sample_count: usize,
}

#[derive(Clone)]
pub struct MonitorService {
    session: Arc<Mutex<MonitoringSession>>,
    views: Arc<watch::Sender<Arc<DashboardView>>>,
    exporter: ReportExporter,
}

impl MonitorService {
    pub fn new(session: MonitoringSession, exporter: ReportExporter) -> MonitorResult<Self> {
        let initial = Arc::new(session.dashboard()?);
        let (views, _) = watch::channel(initial);

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            views: Arc::new(views),
            exporter,
        })
    }

    pub async fn start(&self) -> MonitorResult<SessionStatus> {
        let mut session = self.session.lock().await;
        if session.start() {
            tracing::info!("Monitoring session armed");
        } else {
            tracing::debug!("Start ignored, session already armed");
        }
        self.publish(&session)?;
        Ok(Self::status_of(&session))
    }

    pub async fn stop(&self) -> MonitorResult<SessionStatus> {
        let mut session = self.session.lock().await;
        if session.stop() {
            tracing::info!(
                "Monitoring session stopped after {} samples",
                session.sample_count()
            );
        } else {
            tracing::debug!("Stop ignored, session already idle");
        }
        self.publish(&session)?;
        Ok(Self::status_of(&session))
    }

    /// Processes one timer tick and publishes the refreshed view.
    pub async fn tick(&self) -> MonitorResult<Option<Sample>> {
        let mut session = self.session.lock().await;
        let appended = session.tick()?;
        if let Some(sample) = &appended {
            tracing::debug!(
                "Tick {}: hr={} spo2={} stress={:.1}",
                session.tick_count(),
                sample.heart_rate,
                sample.spo2,
                sample.stress_level
            );
        }
        self.publish(&session)?;
        Ok(appended)
    }

    pub async fn set_time_range(&self, time_range: Granularity) -> MonitorResult<Granularity> {
        let mut session = self.session.lock().await;
        session.set_time_range(time_range);
        self.publish(&session)?;
        Ok(time_range)
    }

    pub async fn set_theme(&self, theme: Theme) -> MonitorResult<ThemeStyle> {
        let mut session = self.session.lock().await;
        session.set_theme(theme);
        self.publish(&session)?;
        Ok(theme.style())
    }

    pub async fn status(&self) -> SessionStatus {
        Self::status_of(&*self.session.lock().await)
    }

    pub async fn snapshot(&self) -> MonitorResult<MetricsSnapshot> {
        self.session.lock().await.snapshot()
    }

    pub async fn history(&self) -> Vec<Sample> {
        self.session.lock().await.history().to_vec()
    }

    /// Resamples to `granularity`, or to the selected time range when none is given.
    pub async fn resampled(&self, granularity: Option<Granularity>) -> HistoricalView {
        let session = self.session.lock().await;
        session.resampled(granularity.unwrap_or(session.time_range()))
    }

    pub async fn dashboard(&self) -> MonitorResult<DashboardView> {
        self.session.lock().await.dashboard()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<DashboardView>> {
        self.views.subscribe()
    }

    /// Exports a report labelled with the current local time.
    pub async fn export_report(&self) -> MonitorResult<ExportedReport> {
        let label = ReportExporter::label_for(&chrono::Local::now());
        self.export_report_labeled(&label).await
    }

    pub async fn export_report_labeled(&self, label: &str) -> MonitorResult<ExportedReport> {
        // Release the session before touching the sink; export never mutates it.
        let snapshot = self.session.lock().await.snapshot()?;
        self.exporter.export(&snapshot, label).await.inspect_err(|e| {
            tracing::error!("Report export failed: {}", e);
        })
    }

    fn publish(&self, session: &MonitoringSession) -> MonitorResult<()> {
        self.views.send_replace(Arc::new(session.dashboard()?));
        Ok(())
    }

    fn status_of(session: &MonitoringSession) -> SessionStatus {
        SessionStatus {
            state: session.state(),
            tick_count: session.tick_count(),
            sample_count: session.sample_count(),
        }
    }
}
