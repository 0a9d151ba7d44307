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
use rubato::{
    FastFixedOut, PolynomialDegree, Resampler as RubatoResampler, SincFixedOut,
    SincInterpolationParameters, SincInterpolationType, WindowFunction,
};
use tracing::{trace, warn};

use super::{check_ratio, Processed, Resampler, ResamplerError};
use crate::sample::StereoFrame;

/// Output frames produced per rubato call. Kept small so a voice's first
/// block, including filter warm-up, fits inside the fragment margin.
const CHUNK_FRAMES: usize = 8;

/// How far the ratio may move from unity in either direction. Matches the
/// widest pitch shift a voice can ask for, 256 times up or down.
const MAX_RATIO_RELATIVE: f64 = 256.0;

const CHANNELS: usize = 2;

/// Band-limited resampler backed by rubato.
///
/// Rubato works on fixed output chunks, so frames beyond what the caller asked
/// for are parked in a FIFO and handed out first on the next call.
pub struct SincResampler<R> {
    inner: R,
    /// Ratio last handed to rubato. NaN forces the next call to set it.
    ratio: f64,
    /// Planar input scratch.
    left: Vec<f32>,
    right: Vec<f32>,
    /// Planar output scratch sized by rubato.
    output_scratch: Vec<Vec<f32>>,
    /// Produced frames not yet delivered.
    pending: Vec<StereoFrame>,
}

impl SincResampler<SincFixedOut<f32>> {
    /// Longest filter, cubic table interpolation.
    pub fn best() -> Result<Self, ResamplerError> {
        Self::sinc(SincInterpolationParameters {
            sinc_len: 48,
            f_cutoff: 0.92,
            oversampling_factor: 256,
            interpolation: SincInterpolationType::Cubic,
            window: WindowFunction::BlackmanHarris2,
        })
    }

    pub fn medium() -> Result<Self, ResamplerError> {
        Self::sinc(SincInterpolationParameters {
            sinc_len: 32,
            f_cutoff: 0.9,
            oversampling_factor: 128,
            interpolation: SincInterpolationType::Linear,
            window: WindowFunction::Blackman2,
        })
    }

    fn sinc(params: SincInterpolationParameters) -> Result<Self, ResamplerError> {
        let inner =
            SincFixedOut::<f32>::new(1.0, MAX_RATIO_RELATIVE, params, CHUNK_FRAMES, CHANNELS)?;
        Ok(Self::with_inner(inner))
    }
}

impl SincResampler<FastFixedOut<f32>> {
    /// Polynomial interpolation, no sinc table.
    pub fn fastest() -> Result<Self, ResamplerError> {
        let inner = FastFixedOut::<f32>::new(
            1.0,
            MAX_RATIO_RELATIVE,
            PolynomialDegree::Cubic,
            CHUNK_FRAMES,
            CHANNELS,
        )?;
        Ok(Self::with_inner(inner))
    }
}

impl<R: RubatoResampler<f32>> SincResampler<R> {
    fn with_inner(inner: R) -> Self {
        let output_scratch = inner.output_buffer_allocate(true);
        let capacity = inner.input_frames_max();
        Self {
            inner,
            ratio: 1.0,
            left: Vec::with_capacity(capacity),
            right: Vec::with_capacity(capacity),
            output_scratch,
            pending: Vec::with_capacity(CHUNK_FRAMES),
        }
    }

    fn apply_ratio(&mut self, ratio: f64) -> Result<(), ResamplerError> {
        let clamped = ratio.clamp(1.0 / MAX_RATIO_RELATIVE, MAX_RATIO_RELATIVE);
        if clamped != self.ratio {
            // Only logged when the ratio changes, not on every block.
            if clamped != ratio {
                warn!(requested = ratio, clamped, "Resample ratio out of range, clamping");
            }
            self.inner
                .set_resample_ratio(clamped, false)
                .map_err(|source| ResamplerError::Process {
                    consumed: 0,
                    produced: 0,
                    source,
                })?;
            self.ratio = clamped;
        }
        Ok(())
    }

    /// Moves parked frames into `output`, returning how many were written.
    fn drain_pending(&mut self, output: &mut [StereoFrame]) -> usize {
        let count = self.pending.len().min(output.len());
        output[..count].copy_from_slice(&self.pending[..count]);
        self.pending.drain(..count);
        count
    }
}

impl<R: RubatoResampler<f32>> Resampler for SincResampler<R> {
    fn reset(&mut self) {
        self.inner.reset();
        self.pending.clear();
        self.ratio = f64::NAN;
    }

    fn process(
        &mut self,
        input: &[StereoFrame],
        output: &mut [StereoFrame],
        ratio: f64,
    ) -> Result<Processed, ResamplerError> {
        check_ratio(ratio)?;
        self.apply_ratio(ratio)?;

        let mut produced = self.drain_pending(output);

        self.left.clear();
        self.right.clear();
        self.left.extend(input.iter().map(|frame| frame.left));
        self.right.extend(input.iter().map(|frame| frame.right));

        let mut consumed = 0;
        while produced < output.len() {
            let needed = self.inner.input_frames_next();
            if input.len() - consumed < needed {
                trace!(
                    needed,
                    available = input.len() - consumed,
                    "Resampler input exhausted"
                );
                break;
            }

            let wave_in = [&self.left[consumed..], &self.right[consumed..]];
            let (frames_in, frames_out) = self
                .inner
                .process_into_buffer(&wave_in[..], &mut self.output_scratch, None)
                .map_err(|source| ResamplerError::Process {
                    consumed,
                    produced,
                    source,
                })?;
            consumed += frames_in;

            let deliver = frames_out.min(output.len() - produced);
            let (left, right) = (&self.output_scratch[0], &self.output_scratch[1]);
            for i in 0..frames_out {
                let frame = StereoFrame::new(left[i], right[i]);
                if i < deliver {
                    output[produced + i] = frame;
                } else {
                    self.pending.push(frame);
                }
            }
            produced += deliver;
        }

        Ok(Processed { consumed, produced })
    }
}

impl<R> std::fmt::Debug for SincResampler<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SincResampler")
            .field("ratio", &self.ratio)
            .field("pending", &self.pending.len())
            .finish()
    }
}
