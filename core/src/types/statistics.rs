//! Download, view and like counters with their recent history.
//!
//! `TimeSeries::values` normally holds `quantity` entries, one per interval.
//! The default decoder does not enforce that; see
//! `Decoder::with_time_series_validation`.

use serde::{Deserialize, Serialize};

use crate::decoder::{lenient, Timestamp};
use crate::params::Resolution;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoStatistics {
    pub id: String,
    pub downloads: StatisticsEntry,
    pub views: StatisticsEntry,
    pub likes: StatisticsEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatistics {
    pub username: String,
    pub downloads: StatisticsEntry,
    pub views: StatisticsEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsEntry {
    pub total: u64,
    pub historical: TimeSeries,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Sum of `values` over the window.
    pub change: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub average: Option<u64>,
    pub resolution: Resolution,
    pub quantity: u32,
    pub values: Vec<DataPoint>,
}

impl TimeSeries {
    pub fn sum(&self) -> u64 {
        self.values.iter().map(|point| point.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: Timestamp,
    pub value: u64,
}

/// `/stats/total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalStats {
    pub photos: u64,
    pub downloads: u64,
    pub views: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub total_photos: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub photo_downloads: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub photographers: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub pixels: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub downloads_per_second: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub views_per_second: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub developers: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub applications: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub requests: Option<u64>,
}

/// `/stats/month`: the past 30 days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStats {
    pub downloads: u64,
    pub views: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub new_photos: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub new_photographers: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub new_pixels: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub new_developers: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub new_applications: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub new_requests: Option<u64>,
}
