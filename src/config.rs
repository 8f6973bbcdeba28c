//! Bench configuration shared by the analysis scripts.
//!
//! `Default` reproduces the literals of the bench this crate was written
//! for; a YAML/JSON file can override them (see `persistence`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data::channel::Normalization;
use crate::data::saturation::Acs712;

/// Everything the analyses need to know about the measurement setup and
/// the offset search, with the bench values as defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Root directory holding the Tektronix run folders (`ALL0040/...`).
    pub data_root: PathBuf,
    /// First run index to analyze (inclusive).
    pub first_run: u32,
    /// Last run index to analyze (inclusive).
    pub last_run: u32,
    /// Channels recorded per acquisition.
    pub channel_count: usize,
    /// Resistive load on CH1, in ohms. CH1 volts / this = load current.
    pub load_ohms: f64,
    /// Ratio of the divider between sensor output and CH2 probe.
    pub divider_ratio: f64,
    /// Current sensor under test.
    pub sensor: Acs712,
    /// Offset sweep for the covariance-scored alignment (inclusive bounds).
    pub offset_min: i64,
    pub offset_max: i64,
    /// Half-width of the mean-product alignment search.
    pub max_shift: u32,
    /// Normalization applied to each channel after loading.
    pub normalization: Normalization,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("DATA"),
            first_run: 40,
            last_run: 40,
            channel_count: 3,
            load_ohms: 8.06,
            // 1.8k over 3.3k between sensor output and scope input
            divider_ratio: (1.8 + 3.3) / 3.3,
            sensor: Acs712::default(),
            offset_min: -20,
            offset_max: -1,
            max_shift: 25,
            normalization: Normalization::Unit,
        }
    }
}

impl BenchConfig {
    /// Inclusive run index range.
    pub fn runs(&self) -> std::ops::RangeInclusive<u32> {
        self.first_run..=self.last_run
    }

    /// Inclusive offset sweep for the covariance-scored alignment.
    pub fn offset_sweep(&self) -> std::ops::RangeInclusive<i64> {
        self.offset_min..=self.offset_max
    }
}
