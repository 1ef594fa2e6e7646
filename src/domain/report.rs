// Report document domain model
use super::metrics::MetricsSnapshot;

pub const REPORT_TITLE: &str = "Heart Rate Monitoring Report";
pub const REPORT_CRITICAL_LINE: &str = "CRITICAL ALERT: Immediate medical attention is advised.";
pub const REPORT_NORMAL_LINE: &str = "Your heart rate is within a manageable range.";
pub const REPORT_ANALYSIS_HEADER: &str = "Heart Health Analysis and Recommendations";

/// Format of the timestamp label embedded in report names.
pub const REPORT_LABEL_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

const LEFT_MARGIN: u32 = 100;
const TOP_LINE_Y: u32 = 750;
const LINE_SPACING: u32 = 20;

/// A line of text placed at a fixed position on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub x: u32,
    pub y: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub label: String,
    pub lines: Vec<ReportLine>,
}

impl ReportDocument {
    pub fn from_snapshot(snapshot: &MetricsSnapshot, label: &str) -> Self {
        let verdict = if snapshot.is_critical() {
            REPORT_CRITICAL_LINE
        } else {
            REPORT_NORMAL_LINE
        };

        let texts = [
            REPORT_TITLE.to_string(),
            format!("Date and Time: {}", label),
            format!("Current Heart Rate: {:.1} BPM", snapshot.current_heart_rate as f64),
            format!("Current SpO2: {:.1}%", snapshot.current_spo2 as f64),
            format!("Status: {}", snapshot.status),
            format!("Current Stress Level: {:.1}", snapshot.current_stress),
            verdict.to_string(),
            REPORT_ANALYSIS_HEADER.to_string(),
        ];

        let lines = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| ReportLine {
                x: LEFT_MARGIN,
                y: TOP_LINE_Y - LINE_SPACING * i as u32,
                text,
            })
            .collect();

        Self {
            label: label.to_string(),
            lines,
        }
    }

    pub fn file_name(&self) -> String {
        format!("heart_rate_report_{}.txt", self.label)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }
}
