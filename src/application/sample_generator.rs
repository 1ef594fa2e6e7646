// Synthetic sample generation
use crate::domain::sample::Sample;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::ops::Range;

/// Every tick whose count is a multiple of this biases toward a critical reading.
pub const SPIKE_PERIOD: u64 = 5;

const NORMAL_HEART_RATE: Range<u32> = 60..130;
const SPIKE_HEART_RATE: Range<u32> = 126..140;
const SPO2_RANGE: Range<u32> = 90..100;

/// Produces one sample per armed tick from an injected random source.
pub struct SampleGenerator {
    rng: Box<dyn RngCore + Send>,
    interval: Duration,
}

impl SampleGenerator {
    pub fn new(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Box::new(rng),
            interval: Duration::seconds(1),
        }
    }

    /// Deterministic generator for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn is_spike_tick(tick_count: u64) -> bool {
        tick_count % SPIKE_PERIOD == 0
    }

    pub fn next_sample(&mut self, previous: DateTime<Utc>, tick_count: u64) -> Sample {
        let heart_rate = if Self::is_spike_tick(tick_count) {
            self.rng.gen_range(SPIKE_HEART_RATE)
        } else {
            self.rng.gen_range(NORMAL_HEART_RATE)
        };
        let spo2 = self.rng.gen_range(SPO2_RANGE);

        Sample::new(previous + self.interval, heart_rate, spo2, heart_rate as f64 / 2.0)
    }
}

impl std::fmt::Debug for SampleGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleGenerator")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}
