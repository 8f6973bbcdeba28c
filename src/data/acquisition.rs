//! Grouping of channels captured together, located by filename convention.
//!
//! The instrument writes each acquisition into its own run folder:
//! `<root>/ALL0040/F0040CH1.CSV`, `.../F0040CH2.CSV`, ... Secondary channels
//! are found by substituting the channel suffix of the base file.

use std::path::{Path, PathBuf};

use crate::data::channel::{Channel, Normalization};
use crate::error::ScopeError;

/// Two or three channels captured together and analyzed as one unit.
#[derive(Debug, Clone)]
pub struct Acquisition {
    channels: Vec<Channel>,
}

impl Acquisition {
    /// Load `count` channels starting from the `CH1` export at `base`.
    ///
    /// `base` must contain the literal `CH1`; siblings are derived from it
    /// (`CH1` -> `CH2`, `CH3`, ...).
    pub fn load<P: AsRef<Path>>(
        base: P,
        count: usize,
        normalization: Normalization,
    ) -> Result<Self, ScopeError> {
        let base = base.as_ref();
        let mut channels = Vec::with_capacity(count);
        channels.push(Channel::from_path_with(base, normalization)?);
        for n in 2..=count {
            let sibling = sibling_channel_path(base, "CH1", &format!("CH{n}"))?;
            channels.push(Channel::from_path_with(sibling, normalization)?);
        }
        Ok(Self { channels })
    }

    /// All channels, in `CH1..CHn` order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Channel by zero-based index (0 = CH1).
    pub fn channel(&self, index: usize) -> &Channel {
        &self.channels[index]
    }

    /// Mutable channel access, for sign flips.
    pub fn channel_mut(&mut self, index: usize) -> &mut Channel {
        &mut self.channels[index]
    }
}

/// Derive a sibling channel path by substituting the channel suffix
/// everywhere it appears in the path (the run folder layout repeats it only
/// in the file name).
pub fn sibling_channel_path(base: &Path, from: &str, to: &str) -> Result<PathBuf, ScopeError> {
    let s = base.to_string_lossy();
    if !s.contains(from) {
        return Err(ScopeError::NoChannelSuffix {
            path: base.to_path_buf(),
            suffix: from.to_string(),
        });
    }
    Ok(PathBuf::from(s.replace(from, to)))
}

/// Path of a channel export inside the Tektronix run folder layout:
/// `<root>/ALL<run:04>/F<run:04>CH<channel>.CSV`.
pub fn run_csv_path(root: &Path, run: u32, channel: u8) -> PathBuf {
    root.join(format!("ALL{run:04}"))
        .join(format!("F{run:04}CH{channel}.CSV"))
}
