// Vital-signs sample domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One reading of the simulated feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub heart_rate: u32,
    pub spo2: u32,
    pub stress_level: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, heart_rate: u32, spo2: u32, stress_level: f64) -> Self {
        Self {
            timestamp,
            heart_rate,
            spo2,
            stress_level,
        }
    }

    /// The sample every history starts with.
    pub fn seed(timestamp: DateTime<Utc>) -> Self {
        Self::new(timestamp, 0, 95, 0.0)
    }
}
