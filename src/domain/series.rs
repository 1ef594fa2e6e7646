// Append-only sample history
use super::error::{MonitorError, MonitorResult};
use super::sample::Sample;
use chrono::{DateTime, Utc};

/// Ordered history of samples. Insertion order is time order and nothing is
/// ever removed.
#[derive(Debug, Clone)]
pub struct SeriesStore {
    samples: Vec<Sample>,
}

impl SeriesStore {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            samples: vec![Sample::seed(start)],
        }
    }

    pub fn append(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn last(&self) -> MonitorResult<&Sample> {
        self.samples.last().ok_or(MonitorError::EmptyStore)
    }

    pub fn all(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_store_is_seeded() {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let store = SeriesStore::new(t0);

        assert_eq!(store.len(), 1);
        assert_eq!(store.last().unwrap(), &Sample::new(t0, 0, 95, 0.0));
    }

    #[test]
    fn test_append_keeps_order() {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let mut store = SeriesStore::new(t0);
        let next = Sample::new(t0 + chrono::Duration::seconds(1), 88, 97, 44.0);
        store.append(next.clone());

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].heart_rate, 0);
        assert_eq!(store.last().unwrap(), &next);
    }

    #[test]
    fn test_last_on_empty_store() {
        let store = SeriesStore::from_samples(Vec::new());
        assert!(matches!(store.last(), Err(MonitorError::EmptyStore)));
    }
}
