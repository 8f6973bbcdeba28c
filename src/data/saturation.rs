//! Transfer function and saturation model of the ACS712 Hall-effect
//! current sensor.
//!
//! The sensor outputs mid-supply at zero current and swings linearly with
//! the configured sensitivity until the output stage clips. Two voltage
//! pairs describe the non-linear region: the hard clamp bounds of the
//! output stage and the (wider) margin inside which the datasheet still
//! promises linearity.

use serde::{Deserialize, Serialize};

/// Saturating clamp: `max(lower, min(upper, x))`.
pub fn saturate(x: f64, lower: f64, upper: f64) -> f64 {
    lower.max(upper.min(x))
}

/// ACS712 parameters. `Default` is the 5 A variant (ACS712-05B) on a 5 V
/// supply, matching the bench this crate was written for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Acs712 {
    /// Sensitivity in V/A.
    pub sensitivity: f64,
    /// Supply voltage in V; the zero-current output sits at half of it.
    pub supply: f64,
    /// Lower output clamp in V.
    pub clip_low: f64,
    /// Upper output clamp in V.
    pub clip_high: f64,
    /// Margin from the supply rails inside which the output is linear, in V.
    pub linear_margin: f64,
}

impl Default for Acs712 {
    fn default() -> Self {
        Self {
            sensitivity: 0.185,
            supply: 5.0,
            clip_low: 0.4,
            clip_high: 4.6,
            linear_margin: 0.3,
        }
    }
}

impl Acs712 {
    /// Zero-current output voltage (mid-supply).
    pub fn offset(&self) -> f64 {
        self.supply / 2.0
    }

    /// Ideal (unclamped) transfer: `v = i * sensitivity + offset`.
    pub fn output_ideal(&self, amps: f64) -> f64 {
        amps * self.sensitivity + self.offset()
    }

    /// Transfer with the output stage clamp applied.
    pub fn output_saturated(&self, amps: f64) -> f64 {
        saturate(self.output_ideal(amps), self.clip_low, self.clip_high)
    }

    /// Full-scale input current range implied by the supply rails.
    pub fn current_range(&self) -> (f64, f64) {
        (
            -self.offset() / self.sensitivity,
            (self.supply - self.offset()) / self.sensitivity,
        )
    }

    /// Input current range over which the output stays linear.
    pub fn linear_current_range(&self) -> (f64, f64) {
        (
            (self.linear_margin - self.offset()) / self.sensitivity,
            (self.supply - self.linear_margin - self.offset()) / self.sensitivity,
        )
    }

    /// Largest RMS of a sinusoidal current that stays inside the linear range.
    pub fn max_linear_rms(&self) -> f64 {
        let (lo, hi) = self.linear_current_range();
        hi.min(-lo) / 2f64.sqrt()
    }

    /// Sample the ideal transfer curve over the full-scale current range.
    pub fn transfer_curve(&self, step: f64) -> Vec<[f64; 2]> {
        self.sample_curve(step, |i| self.output_ideal(i))
    }

    /// Sample the clamped transfer curve over the full-scale current range.
    pub fn saturated_curve(&self, step: f64) -> Vec<[f64; 2]> {
        self.sample_curve(step, |i| self.output_saturated(i))
    }

    fn sample_curve<F: Fn(f64) -> f64>(&self, step: f64, f: F) -> Vec<[f64; 2]> {
        let (lo, hi) = self.current_range();
        let mut points = Vec::new();
        let mut k = 0usize;
        loop {
            let i = lo + k as f64 * step;
            if i >= hi {
                break;
            }
            points.push([i, f(i)]);
            k += 1;
        }
        points
    }
}
