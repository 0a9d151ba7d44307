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

//! Pitch-shifting, loop-aware sample playback for real-time mixers.
//!
//! Decoded audio lives in a [`SampleData`] store shared by every voice playing
//! it. Each voice keeps its own [`HandleState`] and is advanced one block at a
//! time by [`SamplePlayer::play`], which pitch-shifts, loops and scales the
//! frames it reads.

pub mod config;
pub mod playback;
pub mod resampler;
pub mod sample;

#[cfg(test)]
mod testutil;

pub use crate::config::{ConfigError, PlaybackConfig};
pub use playback::{HandleState, LoopMode, PlaybackError, PlaybackWindow, SamplePlayer};
pub use resampler::{InterpolationMode, Resampler, ResamplerError};
pub use sample::{SampleBuffer, SampleData, SampleError, SampleSettings, StereoFrame};
