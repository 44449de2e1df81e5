use chrono::{DateTime, TimeDelta, Utc};

use crate::shared::geo::Coordinate;

/// Settings for [`MockSource`](super::MockSource).
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// How many buses to generate.
    pub count: u32,
    pub seed: u64,
    /// Center of the campus the buses are scattered around.
    pub base: Coordinate,
    /// Width in degrees of the square buses are placed in.
    pub spread: f64,
    /// Upper bound on how stale a generated `last_updated` may be.
    pub max_age: TimeDelta,
    /// Clock used for `last_updated`. `None` reads the system clock on each fetch.
    pub reference_time: Option<DateTime<Utc>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            count: 101,
            seed: 0,
            base: Coordinate::new(17.4485, 78.3908),
            spread: 0.05,
            max_age: TimeDelta::minutes(5),
            reference_time: None,
        }
    }
}

impl MockConfig {
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_base(mut self, base: Coordinate) -> Self {
        self.base = base;
        self
    }

    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    pub fn with_max_age(mut self, max_age: TimeDelta) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn with_reference_time(mut self, time: DateTime<Utc>) -> Self {
        self.reference_time = Some(time);
        self
    }
}

/// Settings for [`CsvSource`](super::CsvSource).
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Entry to read when the source is a zip archive.
    pub file_name: String,
    pub delimiter: u8,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            file_name: "buses.csv".into(),
            delimiter: b',',
        }
    }
}
