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
use super::{check_ratio, Processed, Resampler, ResamplerError};
use crate::sample::StereoFrame;

/// Fractional read position carried between calls.
///
/// `position` is relative to the first frame of the next input slice.
#[derive(Debug, Default)]
struct Cursor {
    position: f64,
}

impl Cursor {
    /// Steps through `input`, calling `kernel` with the integer index and the
    /// fractional offset for every output frame. `lookahead` is how many frames
    /// past the index the kernel reads.
    fn run<F>(
        &mut self,
        input: &[StereoFrame],
        output: &mut [StereoFrame],
        ratio: f64,
        lookahead: usize,
        kernel: F,
    ) -> Result<Processed, ResamplerError>
    where
        F: Fn(&[StereoFrame], usize, f32) -> StereoFrame,
    {
        check_ratio(ratio)?;
        let step = 1.0 / ratio;

        let mut produced = 0;
        for frame in output.iter_mut() {
            let whole = self.position.floor();
            let index = whole as usize;
            if index + lookahead >= input.len() {
                break;
            }
            *frame = kernel(input, index, (self.position - whole) as f32);
            self.position += step;
            produced += 1;
        }

        let consumed = (self.position.floor() as usize).min(input.len());
        self.position -= consumed as f64;
        Ok(Processed { consumed, produced })
    }
}

/// Straight-line interpolation between neighbouring frames.
#[derive(Debug, Default)]
pub struct LinearResampler {
    cursor: Cursor,
}

impl LinearResampler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resampler for LinearResampler {
    fn reset(&mut self) {
        self.cursor = Cursor::default();
    }

    fn process(
        &mut self,
        input: &[StereoFrame],
        output: &mut [StereoFrame],
        ratio: f64,
    ) -> Result<Processed, ResamplerError> {
        self.cursor
            .run(input, output, ratio, 1, |input, index, fraction| {
                StereoFrame::lerp(input[index], input[index + 1], fraction)
            })
    }
}

/// Repeats the nearest earlier frame. Cheapest, and audibly aliased.
#[derive(Debug, Default)]
pub struct ZeroOrderHoldResampler {
    cursor: Cursor,
}

impl ZeroOrderHoldResampler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resampler for ZeroOrderHoldResampler {
    fn reset(&mut self) {
        self.cursor = Cursor::default();
    }

    fn process(
        &mut self,
        input: &[StereoFrame],
        output: &mut [StereoFrame],
        ratio: f64,
    ) -> Result<Processed, ResamplerError> {
        self.cursor
            .run(input, output, ratio, 0, |input, index, _| input[index])
    }
}
