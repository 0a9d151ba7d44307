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
use crate::resampler::{InterpolationMode, Resampler};

/// The cursor of one playing voice.
///
/// Owns its resampler, so filter history never leaks between voices. A handle
/// is `Send` but is meant to be driven by a single audio thread.
pub struct HandleState {
    frame_index: usize,
    backwards: bool,
    /// Always resample, even at unity pitch, so the filter stays primed for
    /// pitch changes.
    varying_pitch: bool,
    interpolation: InterpolationMode,
    resampler: Box<dyn Resampler>,
}

impl HandleState {
    /// Creates a handle at frame 0 with the resampler `interpolation` names.
    pub fn new(
        varying_pitch: bool,
        interpolation: InterpolationMode,
    ) -> Result<Self, PlaybackError> {
        Ok(Self::with_resampler(
            varying_pitch,
            interpolation,
            interpolation.create_resampler()?,
        ))
    }

    /// Creates a handle driven by a caller-supplied resampler. `interpolation`
    /// still picks the fragment margin.
    pub fn with_resampler(
        varying_pitch: bool,
        interpolation: InterpolationMode,
        resampler: Box<dyn Resampler>,
    ) -> Self {
        Self {
            frame_index: 0,
            backwards: false,
            varying_pitch,
            interpolation,
            resampler,
        }
    }

    /// The next store frame to play.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Moves the cursor without touching direction or filter state.
    pub fn set_frame_index(&mut self, frame_index: usize) {
        self.frame_index = frame_index;
    }

    /// Whether a ping-pong loop is on its backwards pass.
    pub fn is_backwards(&self) -> bool {
        self.backwards
    }

    /// Sets the ping-pong direction.
    pub fn set_backwards(&mut self, backwards: bool) {
        self.backwards = backwards;
    }

    /// Whether the voice resamples even at unity pitch.
    pub fn varying_pitch(&self) -> bool {
        self.varying_pitch
    }

    /// The interpolation mode the handle was built with.
    pub fn interpolation_mode(&self) -> InterpolationMode {
        self.interpolation
    }

    /// Moves the cursor and starts a fresh forward pass with no filter history.
    pub fn seek(&mut self, frame_index: usize) {
        self.frame_index = frame_index;
        self.backwards = false;
        self.resampler.reset();
    }

    pub(crate) fn resampler_mut(&mut self) -> &mut dyn Resampler {
        self.resampler.as_mut()
    }
}

impl std::fmt::Debug for HandleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandleState")
            .field("frame_index", &self.frame_index)
            .field("backwards", &self.backwards)
            .field("varying_pitch", &self.varying_pitch)
            .field("interpolation", &self.interpolation)
            .finish()
    }
}
