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
use crate::resampler::ResamplerError;

/// Error types for playback setup
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("Invalid playback range: start {start} is after end {end}")]
    InvalidRange { start: usize, end: usize },

    #[error("Invalid loop range: start {start} is after end {end}")]
    InvalidLoopRange { start: usize, end: usize },

    #[error("Invalid amplification: {0}")]
    InvalidAmplification(f32),

    #[error("Invalid processing sample rate: {0}")]
    InvalidProcessingRate(u32),

    #[error("Failed to create resampler: {0}")]
    Resampler(#[from] ResamplerError),
}
