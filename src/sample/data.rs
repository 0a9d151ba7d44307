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

//! The immutable sample store shared between voices.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use super::error::SampleError;
use super::frame::{StereoFrame, BYTES_PER_FRAME};
use crate::playback::LoopMode;

/// Musical pitch frame 0 corresponds to when none is given.
pub const DEFAULT_BASE_FREQUENCY: f32 = 440.0;

/// Sample rate used for stores that carry no audio.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// An in-memory array of stereo frames plus the rate and pitch it was authored at.
///
/// The frame storage is reference counted, so cloning a store (or deriving one
/// with a different base frequency) never copies audio.
#[derive(Clone)]
pub struct SampleData {
    /// The audio, one entry per frame.
    frames: Arc<[StereoFrame]>,
    /// Rate the frames were authored at.
    sample_rate: u32,
    /// Pitch the frames play at when no shifting is applied.
    frequency: f32,
}

impl SampleData {
    /// Creates a store from decoded frames.
    pub fn new(frames: Vec<StereoFrame>, sample_rate: u32) -> Result<Self, SampleError> {
        if sample_rate == 0 {
            return Err(SampleError::InvalidSampleRate(sample_rate));
        }
        Ok(Self {
            frames: frames.into(),
            sample_rate,
            frequency: DEFAULT_BASE_FREQUENCY,
        })
    }

    /// Creates a store with no frames.
    pub fn empty() -> Self {
        Self {
            frames: Arc::from(Vec::new()),
            sample_rate: DEFAULT_SAMPLE_RATE,
            frequency: DEFAULT_BASE_FREQUENCY,
        }
    }

    /// Creates a store from interleaved samples as handed over by a decoder.
    ///
    /// Mono input is duplicated to both sides, anything wider than stereo keeps
    /// its first two channels. A trailing partial frame is dropped.
    pub fn from_interleaved(
        samples: &[f32],
        channel_count: u16,
        sample_rate: u32,
    ) -> Result<Self, SampleError> {
        if channel_count == 0 {
            return Err(SampleError::InvalidChannelCount(channel_count));
        }

        let frames = samples
            .chunks_exact(channel_count as usize)
            .map(|chunk| match chunk {
                [mono] => StereoFrame::new(*mono, *mono),
                [left, right, ..] => StereoFrame::new(*left, *right),
                [] => StereoFrame::silence(),
            })
            .collect();

        Self::new(frames, sample_rate)
    }

    /// Rehydrates a store from bytes produced by [`SampleData::to_bytes`].
    pub fn from_bytes(sample_rate: u32, bytes: &[u8]) -> Result<Self, SampleError> {
        if bytes.len() % BYTES_PER_FRAME != 0 {
            return Err(SampleError::InvalidByteLength(bytes.len()));
        }

        let frames = bytes
            .chunks_exact(BYTES_PER_FRAME)
            .map(|chunk| {
                <[u8; BYTES_PER_FRAME]>::try_from(chunk)
                    .map(|array| StereoFrame::from_le_bytes(&array))
                    .map_err(|_| SampleError::InvalidByteLength(bytes.len()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(frames, sample_rate)
    }

    /// Returns a store sharing these frames with a different base frequency.
    pub fn with_frequency(&self, frequency: f32) -> Result<Self, SampleError> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(SampleError::InvalidFrequency(frequency));
        }
        Ok(Self {
            frames: self.frames.clone(),
            sample_rate: self.sample_rate,
            frequency,
        })
    }

    /// Read-only view of every frame.
    pub fn frames(&self) -> &[StereoFrame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Playing time of the whole store at its own rate.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frames.len() as f64 / self.sample_rate as f64)
    }

    /// Returns the memory size in bytes.
    pub fn memory_size(&self) -> usize {
        self.frames.len() * BYTES_PER_FRAME
    }

    /// Exports the frames as little-endian `f32` pairs for opaque encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.memory_size());
        for frame in self.frames.iter() {
            frame.write_le_bytes(&mut bytes);
        }
        bytes
    }

    /// The frame at `index`, or silence outside the store.
    #[inline]
    pub fn frame_at(&self, index: usize) -> StereoFrame {
        self.frames.get(index).copied().unwrap_or_default()
    }

    /// Looks up an interpolated left-channel value at `position` in [0, 1).
    ///
    /// Positions outside that range wrap around the store, which makes the
    /// store usable as a single-cycle wavetable.
    pub fn user_wave_sample(&self, position: f32) -> f32 {
        let count = self.frames.len();
        if count == 0 {
            return 0.0;
        }

        let frame = position * count as f32;
        let whole = frame.floor();
        let fraction = frame - whole;
        let first = (whole as i64).rem_euclid(count as i64) as usize;
        let second = (first + 1) % count;

        let a = self.frames[first].left;
        let b = self.frames[second].left;
        a + (b - a) * fraction
    }

    /// Extracts `len` contiguous frames starting at `start`.
    ///
    /// When the request fits inside the store and needs no loop stitching or
    /// direction reversal, the store is borrowed directly. Otherwise a
    /// temporary is synthesized; it is released when the returned value drops.
    #[allow(clippy::too_many_arguments)]
    pub fn fragment(
        &self,
        start: usize,
        len: usize,
        loop_mode: LoopMode,
        backwards: bool,
        loop_start: usize,
        loop_end: usize,
        end: usize,
    ) -> Cow<'_, [StereoFrame]> {
        let naive_end = start.saturating_add(len);
        let fits = match loop_mode {
            LoopMode::Off => naive_end <= end,
            LoopMode::On => naive_end <= loop_end,
            LoopMode::PingPong => !backwards && naive_end < loop_end,
        };
        if fits && naive_end <= self.frames.len() {
            return Cow::Borrowed(&self.frames[start..naive_end]);
        }

        let mut out = Vec::with_capacity(len);
        match loop_mode {
            LoopMode::Off => {
                let available = len.min(end.saturating_sub(start));
                self.copy_range(&mut out, start, start + available);
                out.resize(len, StereoFrame::silence());
            }
            LoopMode::On => self.fill_looped(&mut out, start, len, loop_start, loop_end),
            LoopMode::PingPong => {
                self.fill_ping_pong(&mut out, start, len, backwards, loop_start, loop_end)
            }
        }
        Cow::Owned(out)
    }

    /// Appends frames `[from, to)`, padding with silence past the store.
    fn copy_range(&self, out: &mut Vec<StereoFrame>, from: usize, to: usize) {
        let stored_to = to.min(self.frames.len());
        if from < stored_to {
            out.extend_from_slice(&self.frames[from..stored_to]);
        }
        let padding = to - from.max(stored_to).min(to);
        out.extend(std::iter::repeat(StereoFrame::silence()).take(padding));
    }

    fn fill_looped(
        &self,
        out: &mut Vec<StereoFrame>,
        start: usize,
        len: usize,
        loop_start: usize,
        loop_end: usize,
    ) {
        let first = len.min(loop_end.saturating_sub(start));
        self.copy_range(out, start, start + first);

        if loop_end <= loop_start {
            out.resize(len, StereoFrame::silence());
            return;
        }

        let loop_len = loop_end - loop_start;
        while out.len() < len {
            let todo = (len - out.len()).min(loop_len);
            self.copy_range(out, loop_start, loop_start + todo);
        }
    }

    fn fill_ping_pong(
        &self,
        out: &mut Vec<StereoFrame>,
        start: usize,
        len: usize,
        backwards: bool,
        loop_start: usize,
        loop_end: usize,
    ) {
        if loop_end <= loop_start {
            self.copy_range(out, start, start + len);
            return;
        }

        let mut pos = start;
        // Playback before the loop region always heads into it.
        let mut backwards = backwards && pos >= loop_start;

        while out.len() < len {
            let remaining = len - out.len();
            if backwards {
                let todo = remaining.min(pos - loop_start);
                out.extend((0..todo).map(|i| self.frame_at(pos - i)));
                pos -= todo;
                if pos <= loop_start {
                    backwards = false;
                }
            } else {
                let todo = remaining.min(loop_end.saturating_sub(pos));
                self.copy_range(out, pos, pos + todo);
                pos += todo;
                if pos >= loop_end {
                    backwards = true;
                }
            }
        }
    }
}

impl std::fmt::Debug for SampleData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleData")
            .field("frames", &self.frames.len())
            .field("sample_rate", &self.sample_rate)
            .field("frequency", &self.frequency)
            .finish()
    }
}
