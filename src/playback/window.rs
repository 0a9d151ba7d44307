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
use super::error::PlaybackError;

/// Per-use trim, loop and gain settings.
///
/// A window does not own the audio it describes, so any number of voices can
/// play one store with different windows.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackWindow {
    start: usize,
    end: usize,
    loop_start: usize,
    loop_end: usize,
    amplification: f32,
}

impl PlaybackWindow {
    /// Covers `frames` frames, looping the whole range, at unity gain.
    pub fn new(frames: usize) -> Self {
        Self {
            start: 0,
            end: frames,
            loop_start: 0,
            loop_end: frames,
            amplification: 1.0,
        }
    }

    /// First frame played.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last frame played.
    pub fn end(&self) -> usize {
        self.end
    }

    /// First frame of the loop region.
    pub fn loop_start(&self) -> usize {
        self.loop_start
    }

    /// One past the last frame of the loop region.
    pub fn loop_end(&self) -> usize {
        self.loop_end
    }

    /// Linear gain applied to every output frame.
    pub fn amplification(&self) -> f32 {
        self.amplification
    }

    /// True when the loop region holds at least one frame.
    pub fn has_loop(&self) -> bool {
        self.loop_end > self.loop_start
    }

    /// Sets the playback range. Fails when `start` is after `end`.
    pub fn set_range(&mut self, start: usize, end: usize) -> Result<(), PlaybackError> {
        if start > end {
            return Err(PlaybackError::InvalidRange { start, end });
        }
        self.start = start;
        self.end = end;
        Ok(())
    }

    /// Sets the loop region. An empty region turns looping off.
    pub fn set_loop_range(&mut self, start: usize, end: usize) -> Result<(), PlaybackError> {
        if start > end {
            return Err(PlaybackError::InvalidLoopRange { start, end });
        }
        self.loop_start = start;
        self.loop_end = end;
        Ok(())
    }

    /// Sets the gain. Must be finite and not negative.
    pub fn set_amplification(&mut self, amplification: f32) -> Result<(), PlaybackError> {
        if !amplification.is_finite() || amplification < 0.0 {
            return Err(PlaybackError::InvalidAmplification(amplification));
        }
        self.amplification = amplification;
        Ok(())
    }

    /// Length of the playback range in whole milliseconds at `sample_rate`.
    pub fn length_ms(&self, sample_rate: u32) -> u64 {
        if sample_rate == 0 {
            return 0;
        }
        (self.end - self.start) as u64 * 1000 / sample_rate as u64
    }
}
