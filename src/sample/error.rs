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
/// Error types for building and rehydrating sample stores
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("Invalid sample rate: {0}Hz")]
    InvalidSampleRate(u32),

    #[error("Invalid base frequency: {0}Hz")]
    InvalidFrequency(f32),

    #[error("Invalid channel count: {0}")]
    InvalidChannelCount(u16),

    #[error("Frame data of {0} bytes is not a whole number of stereo frames")]
    InvalidByteLength(usize),
}
