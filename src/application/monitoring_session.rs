// Monitoring session - the explicit owner of all per-session state
use crate::application::resampler::{HistoricalView, resample};
use crate::application::sample_generator::SampleGenerator;
use crate::domain::error::MonitorResult;
use crate::domain::granularity::Granularity;
use crate::domain::metrics::MetricsSnapshot;
use crate::domain::sample::Sample;
use crate::domain::series::SeriesStore;
use crate::domain::session::{SessionController, SessionState};
use crate::domain::theme::{Theme, ThemeStyle};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub state: SessionState,
    pub tick_count: u64,
    pub sample_count: usize,
    pub theme: Theme,
    pub theme_style: ThemeStyle,
    pub time_range: Granularity,
    pub snapshot: MetricsSnapshot,
    pub analysis: Vec<String>,
    pub historical: HistoricalView,
}

#[derive(Debug)]
pub struct MonitoringSession {
    store: SeriesStore,
    controller: SessionController,
    generator: SampleGenerator,
    /// Ticks processed while armed; drives spike selection.
    tick_count: u64,
    time_range: Granularity,
    theme: Theme,
}

impl MonitoringSession {
    pub fn new(start: DateTime<Utc>, generator: SampleGenerator) -> Self {
        Self {
            store: SeriesStore::new(start),
            controller: SessionController::new(),
            generator,
            tick_count: 0,
            time_range: Granularity::default(),
            theme: Theme::default(),
        }
    }

    pub fn with_preferences(mut self, time_range: Granularity, theme: Theme) -> Self {
        self.time_range = time_range;
        self.theme = theme;
        self
    }

    pub fn start(&mut self) -> bool {
        self.controller.start()
    }

    pub fn stop(&mut self) -> bool {
        self.controller.stop()
    }

    /// Processes one timer tick. Returns the appended sample, if the session is armed.
    pub fn tick(&mut self) -> MonitorResult<Option<Sample>> {
        if !self.controller.is_armed() {
            return Ok(None);
        }

        self.tick_count += 1;
        let previous = self.store.last()?.timestamp;
        let sample = self.generator.next_sample(previous, self.tick_count);
        self.store.append(sample.clone());
        Ok(Some(sample))
    }

    pub fn set_time_range(&mut self, time_range: Granularity) {
        self.time_range = time_range;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn state(&self) -> SessionState {
        self.controller.state()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn sample_count(&self) -> usize {
        self.store.len()
    }

    pub fn time_range(&self) -> Granularity {
        self.time_range
    }

    pub fn snapshot(&self) -> MonitorResult<MetricsSnapshot> {
        MetricsSnapshot::compute(&self.store)
    }

    pub fn history(&self) -> &[Sample] {
        self.store.all()
    }

    pub fn resampled(&self, granularity: Granularity) -> HistoricalView {
        resample(self.store.all(), granularity)
    }

    pub fn dashboard(&self) -> MonitorResult<DashboardView> {
        let snapshot = self.snapshot()?;
        let analysis = snapshot.summary.analysis_lines();

        Ok(DashboardView {
            state: self.state(),
            tick_count: self.tick_count,
            sample_count: self.store.len(),
            theme: self.theme,
            theme_style: self.theme.style(),
            time_range: self.time_range,
            snapshot,
            analysis,
            historical: self.resampled(self.time_range),
        })
    }
}
