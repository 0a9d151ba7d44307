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

//! In-memory sample storage.
//!
//! This module provides:
//! - The stereo frame type and its byte layout
//! - The immutable, reference-counted sample store with fragment extraction
//! - A replaceable holder so a sound can be reloaded while voices play it
//! - Settings for persisting a store through an external serializer

mod buffer;
mod data;
mod error;
mod frame;
mod settings;

pub use buffer::SampleBuffer;
pub use data::{SampleData, DEFAULT_BASE_FREQUENCY, DEFAULT_SAMPLE_RATE};
pub use error::SampleError;
pub use frame::{StereoFrame, BYTES_PER_FRAME};
pub use settings::SampleSettings;
