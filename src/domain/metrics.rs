// Derived metrics domain model
//
// Every value here is recomputed from the full history on each call. That is
// fine for a 1 Hz simulated feed; a high-rate feed would need running sums and
// a bounded variability window with the same outputs.
use super::error::MonitorResult;
use super::series::SeriesStore;
use serde::Serialize;

/// Heart rates above this are critical.
pub const CRITICAL_HEART_RATE_BPM: u32 = 125;
/// SpO2 below this is a warning.
pub const LOW_SPO2_PERCENT: u32 = 95;

pub const STATUS_NORMAL: &str = "Normal";
pub const STATUS_CRITICAL: &str = "Critical: Seek immediate attention!";
pub const THRESHOLD_ALERT: &str = "Critical Alert: Heart rate exceeds safe limits!";
pub const SPO2_WARNING: &str = "Warning: Low SpO2!";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub average_heart_rate: f64,
    pub max_heart_rate: u32,
    pub average_spo2: f64,
    pub max_spo2: u32,
    pub average_stress: f64,
}

impl SummaryStats {
    fn compute(store: &SeriesStore) -> Self {
        let samples = store.all();
        let count = samples.len().max(1) as f64;

        let hr_sum: f64 = samples.iter().map(|s| s.heart_rate as f64).sum();
        let spo2_sum: f64 = samples.iter().map(|s| s.spo2 as f64).sum();
        let stress_sum: f64 = samples.iter().map(|s| s.stress_level).sum();

        Self {
            average_heart_rate: hr_sum / count,
            max_heart_rate: samples.iter().map(|s| s.heart_rate).max().unwrap_or(0),
            average_spo2: spo2_sum / count,
            max_spo2: samples.iter().map(|s| s.spo2).max().unwrap_or(0),
            average_stress: stress_sum / count,
        }
    }

    /// Human readable lines shown under "Analysis" on the dashboard.
    pub fn analysis_lines(&self) -> Vec<String> {
        vec![
            format!("Average Heart Rate: {:.1} BPM", self.average_heart_rate),
            format!("Average SpO2: {:.1}%", self.average_spo2),
            format!("Maximum Heart Rate: {:.1} BPM", self.max_heart_rate as f64),
            format!("Maximum SpO2: {:.1}%", self.max_spo2 as f64),
            format!("Average Stress Level: {:.1}", self.average_stress),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub current_heart_rate: u32,
    pub current_spo2: u32,
    pub current_stress: f64,
    pub status: String,
    pub threshold_alert: String,
    pub spo2_status: String,
    pub hrv: Vec<i64>,
    pub summary: SummaryStats,
}

impl MetricsSnapshot {
    pub fn compute(store: &SeriesStore) -> MonitorResult<Self> {
        let last = store.last()?;
        let heart_rates: Vec<u32> = store.all().iter().map(|s| s.heart_rate).collect();

        Ok(Self {
            current_heart_rate: last.heart_rate,
            current_spo2: last.spo2,
            current_stress: last.stress_level,
            status: heart_rate_status(last.heart_rate).to_string(),
            threshold_alert: threshold_alert(last.heart_rate).to_string(),
            spo2_status: spo2_status(last.spo2).to_string(),
            hrv: heart_rate_variability(&heart_rates),
            summary: SummaryStats::compute(store),
        })
    }

    pub fn is_critical(&self) -> bool {
        is_critical(self.current_heart_rate)
    }
}

pub fn is_critical(heart_rate: u32) -> bool {
    heart_rate > CRITICAL_HEART_RATE_BPM
}

pub fn heart_rate_status(heart_rate: u32) -> &'static str {
    if is_critical(heart_rate) {
        STATUS_CRITICAL
    } else {
        STATUS_NORMAL
    }
}

pub fn threshold_alert(heart_rate: u32) -> &'static str {
    if is_critical(heart_rate) { THRESHOLD_ALERT } else { "" }
}

pub fn spo2_status(spo2: u32) -> &'static str {
    if spo2 >= LOW_SPO2_PERCENT {
        STATUS_NORMAL
    } else {
        SPO2_WARNING
    }
}

/// First differences of the heart-rate history, used as a variability proxy.
pub fn heart_rate_variability(heart_rates: &[u32]) -> Vec<i64> {
    if heart_rates.len() < 2 {
        return Vec::new();
    }

    let differences: Vec<i64> = heart_rates
        .windows(2)
        .map(|pair| pair[1] as i64 - pair[0] as i64)
        .collect();

    // Unreachable with two or more samples; kept so the empty case still yields a value.
    if differences.is_empty() {
        vec![0]
    } else {
        differences
    }
}
