//! One oscilloscope channel loaded from a Tektronix CSV export.
//!
//! A channel export is a six-column CSV without a header row:
//! `name,value,,time,sample,`. The instrument writes one metadata name/value
//! pair per row into the first two columns for as long as there are
//! parameters, while *every* row carries a time/sample pair in columns four
//! and five. Both facets are parsed in a single pass.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScopeError;

/// How the value series of a channel is normalized after loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Normalization {
    /// Keep raw sample values (divisor 1).
    #[default]
    Unit,
    /// Divide by the RMS of the record.
    Rms,
}

/// Typed view of the acquisition metadata block of a channel export.
#[derive(Debug, Clone, PartialEq)]
pub struct TekMeta {
    pub record_length: usize,
    pub sample_interval: f64,
    pub trigger_point: i64,
    pub source: String,
    pub vertical_units: String,
    pub vertical_scale: f64,
    pub vertical_offset: f64,
    pub horizontal_units: String,
    pub horizontal_scale: f64,
    pub pt_fmt: String,
    pub yzero: f64,
    pub probe_atten: f64,
    pub firmware_version: String,
}

/// One acquisition trace plus its instrument metadata.
///
/// Immutable after construction except for [`Channel::invert`].
#[derive(Debug, Clone)]
pub struct Channel {
    path: PathBuf,
    params: HashMap<String, String>,
    meta: TekMeta,
    time: Vec<f64>,
    values: Vec<f64>,
    normalized: Vec<f64>,
    norm: f64,
}

impl Channel {
    /// Load a channel export with unit normalization.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScopeError> {
        Self::from_path_with(path, Normalization::Unit)
    }

    /// Load a channel export with an explicit normalization mode.
    pub fn from_path_with<P: AsRef<Path>>(
        path: P,
        normalization: Normalization,
    ) -> Result<Self, ScopeError> {
        let path = path.as_ref().to_path_buf();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&path)?;

        let mut params: HashMap<String, String> = HashMap::new();
        let mut time: Vec<f64> = Vec::new();
        let mut values: Vec<f64> = Vec::new();

        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let cell = |i: usize| record.get(i).unwrap_or("");

            if !cell(0).is_empty() {
                params.insert(cell(0).to_string(), cell(1).to_string());
            }

            // Metadata-only rows leave the series cells empty.
            match (cell(3).parse::<f64>(), cell(4).parse::<f64>()) {
                (Ok(t), Ok(v)) => {
                    time.push(t);
                    values.push(v);
                }
                _ => {
                    if !cell(3).is_empty() || !cell(4).is_empty() {
                        log::debug!(
                            "{}: skipping row {} with non-numeric sample cells",
                            path.display(),
                            row
                        );
                    }
                }
            }
        }

        let meta = TekMeta::from_params(&params)?;

        let norm = match normalization {
            Normalization::Unit => 1.0,
            Normalization::Rms => {
                let n = if meta.record_length > 0 {
                    meta.record_length as f64
                } else {
                    values.len() as f64
                };
                (values.iter().map(|v| v * v).sum::<f64>() / n).sqrt()
            }
        };
        let normalized = values.iter().map(|v| v / norm).collect();

        log::debug!(
            "{}: {} samples from {} at {} s/sample",
            path.display(),
            values.len(),
            meta.source,
            meta.sample_interval
        );

        Ok(Self {
            path,
            params,
            meta,
            time,
            values,
            normalized,
            norm,
        })
    }

    /// Path this channel was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Typed acquisition metadata.
    pub fn meta(&self) -> &TekMeta {
        &self.meta
    }

    /// Time axis in seconds, one entry per sample.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Raw sample values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sample values divided by the normalization divisor.
    pub fn normalized(&self) -> &[f64] {
        &self.normalized
    }

    /// The normalization divisor (1 for [`Normalization::Unit`]).
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Raw string value of an acquisition parameter.
    pub fn param(&self, name: &str) -> Result<&str, ScopeError> {
        self.params
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ScopeError::MissingParam(name.to_string()))
    }

    /// Acquisition parameter parsed as a float.
    pub fn float_param(&self, name: &str) -> Result<f64, ScopeError> {
        let value = self.param(name)?;
        value
            .parse::<f64>()
            .map_err(|_| ScopeError::MalformedParam {
                name: name.to_string(),
                value: value.to_string(),
            })
    }

    /// Acquisition parameter parsed as a float and rounded to an integer.
    ///
    /// The instrument stores counts like the record length in scientific
    /// notation (`2.500000e+03`), so integers go through a float parse.
    pub fn int_param(&self, name: &str) -> Result<i64, ScopeError> {
        Ok(self.float_param(name)?.round() as i64)
    }

    /// Flip the trace over the y=0 axis (both raw and normalized values).
    pub fn invert(&mut self) {
        for v in &mut self.values {
            *v = -*v;
        }
        for v in &mut self.normalized {
            *v = -*v;
        }
    }
}

impl TekMeta {
    fn from_params(params: &HashMap<String, String>) -> Result<Self, ScopeError> {
        let get = |name: &str| -> Result<&str, ScopeError> {
            params
                .get(name)
                .map(String::as_str)
                .ok_or_else(|| ScopeError::MissingParam(name.to_string()))
        };
        let get_f64 = |name: &str| -> Result<f64, ScopeError> {
            let value = get(name)?;
            value
                .parse::<f64>()
                .map_err(|_| ScopeError::MalformedParam {
                    name: name.to_string(),
                    value: value.to_string(),
                })
        };
        let get_int = |name: &str| -> Result<i64, ScopeError> { Ok(get_f64(name)?.round() as i64) };

        Ok(Self {
            record_length: get_int("Record Length")?.max(0) as usize,
            sample_interval: get_f64("Sample Interval")?,
            trigger_point: get_int("Trigger Point")?,
            source: get("Source")?.to_string(),
            vertical_units: get("Vertical Units")?.to_string(),
            vertical_scale: get_f64("Vertical Scale")?,
            vertical_offset: get_f64("Vertical Offset")?,
            horizontal_units: get("Horizontal Units")?.to_string(),
            horizontal_scale: get_f64("Horizontal Scale")?,
            pt_fmt: get("Pt Fmt")?.to_string(),
            yzero: get_f64("Yzero")?,
            probe_atten: get_f64("Probe Atten")?,
            firmware_version: get("Firmware Version")?.to_string(),
        })
    }
}
