//! Integer-offset alignment between two sampled series.
//!
//! Two brute-force searches are provided:
//! - [`best_offset_by_product`] maximizes the mean pointwise product of the
//!   overlapping regions (useful for raw waveform correspondence)
//! - [`best_offset_by_fit`] runs a line fit per candidate shift and
//!   minimizes the total squared parameter covariance
//!
//! Both keep a deterministic tie-break: the first strict extremum
//! encountered wins.

use crate::data::fit::{fit_line, LineFit};
use crate::error::ScopeError;

/// Truncate both series to their overlapping region for an integer shift.
///
/// For a positive `offset` the first `offset` samples of `ys` and the last
/// `offset` samples of `xs` are dropped; a negative `offset` mirrors that.
/// The returned slices have equal length. A shift that leaves no overlap is
/// an error rather than a silently empty pair.
pub fn overlap<'a>(
    xs: &'a [f64],
    ys: &'a [f64],
    offset: i64,
) -> Result<(&'a [f64], &'a [f64]), ScopeError> {
    let k = offset.unsigned_abs() as usize;
    let empty = || ScopeError::EmptyOverlap {
        offset,
        len_x: xs.len(),
        len_y: ys.len(),
    };

    let (x, y) = if offset >= 0 {
        if k >= xs.len() || k >= ys.len() {
            return Err(empty());
        }
        (&xs[..xs.len() - k], &ys[k..])
    } else {
        if k >= xs.len() || k >= ys.len() {
            return Err(empty());
        }
        (&xs[k..], &ys[..ys.len() - k])
    };

    // Inputs of unequal length leave a ragged edge; trim to the common span.
    let len = x.len().min(y.len());
    if len == 0 {
        return Err(empty());
    }
    Ok((&x[..len], &y[..len]))
}

/// Result of a mean-product alignment search.
#[derive(Debug, Clone, Copy)]
pub struct ProductAlignment {
    pub offset: i64,
    /// Mean pointwise product of the overlapping regions at `offset`.
    pub score: f64,
}

/// Result of a covariance-scored alignment search.
#[derive(Debug, Clone, Copy)]
pub struct FitAlignment {
    pub offset: i64,
    /// Line fit of the overlapping regions at `offset`.
    pub fit: LineFit,
    /// Sum of squared covariance entries of `fit`.
    pub score: f64,
}

fn mean_product(xs: &[f64], ys: &[f64]) -> Result<f64, ScopeError> {
    if xs.len() != ys.len() {
        return Err(ScopeError::LengthMismatch(xs.len(), ys.len()));
    }
    if xs.is_empty() {
        return Err(ScopeError::TooFewSamples { needed: 1, got: 0 });
    }
    Ok(xs.iter().zip(ys).map(|(x, y)| x * y).sum::<f64>() / xs.len() as f64)
}

/// Find the shift in `-max_shift..=max_shift` that maximizes the mean
/// pointwise product of the overlapping regions.
///
/// Shift 0 is evaluated first, then each magnitude in both directions, so
/// with identical inputs the result is offset 0.
pub fn best_offset_by_product(
    xs: &[f64],
    ys: &[f64],
    max_shift: u32,
) -> Result<ProductAlignment, ScopeError> {
    let (x0, y0) = overlap(xs, ys, 0)?;
    let mut best = ProductAlignment {
        offset: 0,
        score: mean_product(x0, y0)?,
    };
    log::debug!("offset 0: product {:.6e}", best.score);

    for shift in 1..=max_shift as i64 {
        for offset in [shift, -shift] {
            let (x, y) = overlap(xs, ys, offset)?;
            let score = mean_product(x, y)?;
            log::debug!("offset {offset}: product {score:.6e}");
            if score > best.score {
                best = ProductAlignment { offset, score };
            }
        }
    }

    log::debug!("best offset {} (product {:.6e})", best.offset, best.score);
    Ok(best)
}

/// Fit a line per candidate shift and keep the one whose fit has the
/// smallest total squared covariance.
pub fn best_offset_by_fit<I>(xs: &[f64], ys: &[f64], offsets: I) -> Result<FitAlignment, ScopeError>
where
    I: IntoIterator<Item = i64>,
{
    let mut best: Option<FitAlignment> = None;

    for offset in offsets {
        let (x, y) = overlap(xs, ys, offset)?;
        let fit = fit_line(x, y)?;
        let score = fit.covariance_score();
        log::debug!("offset {offset}: covariance score {score:.6e}");
        if best.map_or(true, |b| score < b.score) {
            best = Some(FitAlignment { offset, fit, score });
        }
    }

    let best = best.ok_or(ScopeError::EmptySearchRange)?;
    log::debug!("best offset {} (score {:.6e})", best.offset, best.score);
    Ok(best)
}
