// Calendar-bucketed resampling for the historical view
use crate::domain::granularity::Granularity;
use crate::domain::sample::Sample;
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub start: DateTime<Utc>,
    pub sample_count: usize,
    pub mean_heart_rate: f64,
    pub mean_spo2: f64,
    pub mean_stress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HistoricalView {
    Raw {
        samples: Vec<Sample>,
    },
    Bucketed {
        granularity: Granularity,
        buckets: Vec<Bucket>,
    },
}

impl HistoricalView {
    pub fn len(&self) -> usize {
        match self {
            HistoricalView::Raw { samples } => samples.len(),
            HistoricalView::Bucketed { buckets, .. } => buckets.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Groups samples into UTC calendar buckets. Days start at midnight, weeks
/// on Monday (ISO) and months on day 1. Buckets without samples are omitted.
pub fn resample(history: &[Sample], granularity: Granularity) -> HistoricalView {
    if granularity == Granularity::Raw {
        return HistoricalView::Raw {
            samples: history.to_vec(),
        };
    }

    let mut buckets: Vec<Accumulator> = Vec::new();
    for sample in history {
        let start = bucket_start(sample.timestamp, granularity);
        // History is time-ordered, so a new bucket can only follow the last one.
        match buckets.last_mut() {
            Some(acc) if acc.start == start => acc.add(sample),
            _ => {
                let mut acc = Accumulator::new(start);
                acc.add(sample);
                buckets.push(acc);
            }
        }
    }

    HistoricalView::Bucketed {
        granularity,
        buckets: buckets.into_iter().map(Accumulator::finish).collect(),
    }
}

/// Start of the calendar bucket containing `timestamp`.
pub fn bucket_start(timestamp: DateTime<Utc>, granularity: Granularity) -> DateTime<Utc> {
    let date = timestamp.date_naive();
    let day = match granularity {
        Granularity::Raw => return timestamp,
        Granularity::Daily => date,
        Granularity::Weekly => {
            date - Duration::days(date.weekday().num_days_from_monday() as i64)
        }
        Granularity::Monthly => {
            NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
        }
    };
    Utc.from_utc_datetime(&day.and_time(chrono::NaiveTime::MIN))
}

struct Accumulator {
    start: DateTime<Utc>,
    count: usize,
    heart_rate_sum: f64,
    spo2_sum: f64,
    stress_sum: f64,
}

impl Accumulator {
    fn new(start: DateTime<Utc>) -> Self {
        Self {
            start,
            count: 0,
            heart_rate_sum: 0.0,
            spo2_sum: 0.0,
            stress_sum: 0.0,
        }
    }

    fn add(&mut self, sample: &Sample) {
        self.count += 1;
        self.heart_rate_sum += sample.heart_rate as f64;
        self.spo2_sum += sample.spo2 as f64;
        self.stress_sum += sample.stress_level;
    }

    fn finish(self) -> Bucket {
        let n = self.count as f64;
        Bucket {
            start: self.start,
            sample_count: self.count,
            mean_heart_rate: self.heart_rate_sum / n,
            mean_spo2: self.spo2_sum / n,
            mean_stress: self.stress_sum / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, hr: u32, spo2: u32) -> Sample {
        let ts = Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();
        Sample::new(ts, hr, spo2, hr as f64 / 2.0)
    }

    fn buckets(view: HistoricalView) -> Vec<Bucket> {
        match view {
            HistoricalView::Bucketed { buckets, .. } => buckets,
            HistoricalView::Raw { .. } => panic!("expected bucketed view"),
        }
    }

    #[test]
    fn test_daily_two_days() {
        let history = vec![
            at(2024, 5, 10, 22, 80, 96),
            at(2024, 5, 10, 23, 100, 92),
            at(2024, 5, 11, 0, 70, 99),
        ];

        let result = buckets(resample(&history, Granularity::Daily));
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].start, Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap());
        assert_eq!(result[0].sample_count, 2);
        assert!((result[0].mean_heart_rate - 90.0).abs() < 1e-9);
        assert!((result[0].mean_spo2 - 94.0).abs() < 1e-9);
        assert!((result[0].mean_stress - 45.0).abs() < 1e-9);
        assert!((result[1].mean_heart_rate - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_gaps_are_not_filled() {
        let history = vec![at(2024, 5, 10, 8, 80, 96), at(2024, 5, 14, 8, 90, 96)];
        let result = buckets(resample(&history, Granularity::Daily));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_weekly_buckets_start_on_monday() {
        // 2024-05-12 is a Sunday, 2024-05-13 a Monday.
        let history = vec![
            at(2024, 5, 6, 9, 60, 95),
            at(2024, 5, 12, 23, 80, 95),
            at(2024, 5, 13, 0, 100, 95),
        ];

        let result = buckets(resample(&history, Granularity::Weekly));
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].start, Utc.with_ymd_and_hms(2024, 5, 6, 0, 0, 0).unwrap());
        assert!((result[0].mean_heart_rate - 70.0).abs() < 1e-9);
        assert_eq!(result[1].start, Utc.with_ymd_and_hms(2024, 5, 13, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_monthly_buckets_start_on_first_day() {
        let history = vec![
            at(2024, 1, 31, 23, 60, 95),
            at(2024, 2, 1, 0, 80, 95),
            at(2024, 2, 29, 23, 100, 95),
        ];

        let result = buckets(resample(&history, Granularity::Monthly));
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].start, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(result[1].sample_count, 2);
        assert!((result[1].mean_heart_rate - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_raw_is_passthrough() {
        let history = vec![at(2024, 5, 10, 8, 80, 96), at(2024, 5, 10, 9, 90, 97)];
        assert_eq!(
            resample(&history, Granularity::Raw),
            HistoricalView::Raw { samples: history.clone() }
        );
    }

    #[test]
    fn test_empty_history() {
        assert!(resample(&[], Granularity::Daily).is_empty());
    }
}
