// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! Streaming resamplers used by voices to pitch-shift sample fragments.
//!
//! A resampler is owned by exactly one voice. It keeps whatever filter history
//! it needs between calls, so consecutive fragments join without clicks.

use serde::{Deserialize, Serialize};

use crate::sample::StereoFrame;

mod error;
mod linear;
mod sinc;

pub use error::ResamplerError;
pub use linear::{LinearResampler, ZeroOrderHoldResampler};
pub use sinc::SincResampler;

/// Input and output frame counts of one `process` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Processed {
    /// Input frames the resampler is done with.
    pub consumed: usize,
    /// Frames written to the output.
    pub produced: usize,
}

/// A stateful stereo resampler.
pub trait Resampler: Send {
    /// Clears all filter history.
    fn reset(&mut self);

    /// Resamples `input` into `output` at `ratio` (output rate / input rate).
    ///
    /// Writes at most `output.len()` frames. Stops early, without error, when
    /// `input` runs out.
    fn process(
        &mut self,
        input: &[StereoFrame],
        output: &mut [StereoFrame],
        ratio: f64,
    ) -> Result<Processed, ResamplerError>;
}

/// Interpolation quality of a voice, from best to cheapest.
#[derive(Deserialize, Clone, Copy, Serialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMode {
    SincBest,
    SincMedium,
    SincFastest,
    ZeroOrderHold,
    #[default]
    Linear,
}

impl InterpolationMode {
    /// Extra frames a fragment needs beyond its nominal length so the
    /// interpolation filter never reads past it.
    pub fn margin(self) -> usize {
        match self {
            InterpolationMode::SincBest
            | InterpolationMode::SincMedium
            | InterpolationMode::SincFastest => 64,
            InterpolationMode::ZeroOrderHold | InterpolationMode::Linear => 4,
        }
    }

    /// Builds a fresh resampler of this quality.
    pub fn create_resampler(self) -> Result<Box<dyn Resampler>, ResamplerError> {
        Ok(match self {
            InterpolationMode::SincBest => Box::new(SincResampler::best()?),
            InterpolationMode::SincMedium => Box::new(SincResampler::medium()?),
            InterpolationMode::SincFastest => Box::new(SincResampler::fastest()?),
            InterpolationMode::ZeroOrderHold => Box::new(ZeroOrderHoldResampler::new()),
            InterpolationMode::Linear => Box::new(LinearResampler::new()),
        })
    }
}

/// Rejects ratios no resampler can honor.
pub(crate) fn check_ratio(ratio: f64) -> Result<(), ResamplerError> {
    if ratio.is_finite() && ratio > 0.0 {
        Ok(())
    } else {
        Err(ResamplerError::InvalidRatio(ratio))
    }
}
