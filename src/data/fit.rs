//! Affine model and closed-form least-squares line fit.
//!
//! The fit reports the same quantities a generic least-squares solver would
//! for a linear model: slope, intercept, and the 2x2 parameter covariance
//! matrix (residual variance times the inverse normal matrix).

use serde::{Deserialize, Serialize};

use crate::error::ScopeError;

/// Two-parameter affine function, used both as the fit target and for
/// generating ideal/reference lines.
pub fn linear(x: f64, slope: f64, intercept: f64) -> f64 {
    slope * x + intercept
}

/// Result of a least-squares line fit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
    /// Parameter covariance, ordered `[slope, intercept]`.
    pub covariance: [[f64; 2]; 2],
}

impl LineFit {
    /// Evaluate the fitted line at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        linear(x, self.slope, self.intercept)
    }

    /// Sum of squared covariance entries; the alignment search minimizes this.
    pub fn covariance_score(&self) -> f64 {
        self.covariance
            .iter()
            .flat_map(|row| row.iter())
            .map(|c| c * c)
            .sum()
    }
}

/// Ordinary least squares for `y = slope * x + intercept`.
///
/// Requires equal-length input slices with at least three points (two
/// parameters leave no residual degrees of freedom below that) and a
/// non-zero spread in x.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Result<LineFit, ScopeError> {
    if xs.len() != ys.len() {
        return Err(ScopeError::LengthMismatch(xs.len(), ys.len()));
    }
    let n = xs.len();
    if n < 3 {
        return Err(ScopeError::TooFewSamples { needed: 3, got: n });
    }

    let nf = n as f64;
    let sx: f64 = xs.iter().sum();
    let sy: f64 = ys.iter().sum();
    let sxx: f64 = xs.iter().map(|x| x * x).sum();
    let sxy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();

    let det = nf * sxx - sx * sx;
    if det.abs() <= f64::EPSILON * nf * sxx.max(1.0) {
        return Err(ScopeError::DegenerateFit);
    }

    let slope = (nf * sxy - sx * sy) / det;
    let intercept = (sxx * sy - sx * sxy) / det;

    // Residual variance with n-2 degrees of freedom scales the inverse
    // normal matrix into the parameter covariance.
    let ss_res: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| {
            let r = y - linear(*x, slope, intercept);
            r * r
        })
        .sum();
    let sigma2 = ss_res / (nf - 2.0);

    let covariance = [
        [sigma2 * nf / det, -sigma2 * sx / det],
        [-sigma2 * sx / det, sigma2 * sxx / det],
    ];

    Ok(LineFit {
        slope,
        intercept,
        covariance,
    })
}
