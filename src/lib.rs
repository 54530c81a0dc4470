use std::{
    fmt::{self, Display},
    ops::{Add, AddAssign},
};

pub mod config;
pub mod error;
pub mod merge;
pub mod pipeline;
pub mod report;
pub mod scan;
pub mod segment;
pub mod source;
pub mod temperature;

pub use config::Config;
pub use error::{Error, Result};
pub use merge::GlobalMap;
pub use pipeline::{aggregate, run};
pub use report::{Report, StationSummary};

/// Running statistics for one station, in tenths of a degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherRecord {
    pub min: i32,
    pub max: i32,
    pub sum: i64,
    pub count: u64,
}

impl WeatherRecord {
    #[inline]
    pub fn update(&mut self, item: i32) {
        self.count += 1;
        self.min = self.min.min(item);
        self.max = self.max.max(item);
        self.sum += item as i64;
    }

    pub fn new(item: i32) -> Self {
        Self {
            min: item,
            max: item,
            sum: item as i64,
            count: 1,
        }
    }

    /// Mean rounded half away from zero, in tenths.
    pub fn mean(&self) -> i64 {
        if self.count == 0 {
            return 0;
        }
        (self.sum as f64 / self.count as f64).round() as i64
    }
}

impl Default for WeatherRecord {
    fn default() -> Self {
        Self {
            min: i32::MAX,
            max: i32::MIN,
            sum: 0,
            count: 0,
        }
    }
}

impl Add for WeatherRecord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            count: self.count + rhs.count,
            min: self.min.min(rhs.min),
            max: self.max.max(rhs.max),
            sum: self.sum + rhs.sum,
        }
    }
}

impl AddAssign for WeatherRecord {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            Tenths(self.min as i64),
            Tenths(self.mean()),
            Tenths(self.max as i64)
        )
    }
}

/// Fixed-point value printed with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenths(pub i64);

impl Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{}", abs / 10, abs % 10)
    }
}
